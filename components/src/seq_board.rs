use fluent::{FluentBundle, FluentResource};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::Dispatch;

use i18n::LanguageType;
use queuing_sdk::api;
use queuing_sdk::model::seq::Seq;
use queuing_sdk::state::{self, board_bundle, BoardState, I18nState};
use utils::tr;

/// 取号面板
/// 加载时向 `/seq` 请求一个号码并显示在输入框中,
/// 点击复制按钮将输入框内容写入剪切板并显示提示
pub struct SeqBoard {
    text_ref: NodeRef,
    state: BoardState,
    i18n: FluentBundle<FluentResource>,
    lang: LanguageType,
}

#[derive(Properties, Clone, PartialEq)]
pub struct SeqBoardProps {
    /// value shown before the fetch completes
    #[prop_or_default]
    pub initial: AttrValue,
}

pub enum SeqBoardMsg {
    Loaded(queuing_sdk::Result<Seq>),
    Copy,
    SwitchLanguage(Event),
}

impl Component for SeqBoard {
    type Message = SeqBoardMsg;

    type Properties = SeqBoardProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { SeqBoardMsg::Loaded(api::seq().get_seq().await) });

        let lang = Dispatch::<I18nState>::global().get().lang;
        Self {
            text_ref: NodeRef::default(),
            state: BoardState::new(ctx.props().initial.to_string()),
            i18n: board_bundle(lang),
            lang,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SeqBoardMsg::Loaded(result) => self.state.loaded(result),
            SeqBoardMsg::Copy => {
                let live = self
                    .text_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value());
                let text = self.state.copy(live);
                spawn_local(async move {
                    state::write_clipboard(api::clipboard().as_ref(), &text).await;
                });
                true
            }
            SeqBoardMsg::SwitchLanguage(event) => {
                let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                    return false;
                };
                let lang = LanguageType::from(select.value().as_str());
                log::debug!("switch language: {:?}", lang);
                Dispatch::<I18nState>::global().reduce_mut(|s| s.lang = lang);
                self.i18n = board_bundle(lang);
                self.lang = lang;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_: MouseEvent| SeqBoardMsg::Copy);
        let onchange = ctx.link().callback(SeqBoardMsg::SwitchLanguage);

        let help = self.state.help(&self.i18n);
        let help_style = if help.is_some() {
            "display: block"
        } else {
            "display: none"
        };

        html! {
            <div class="seq-board">
                <div class="seq-board-header">
                    <h3>{tr!(self.i18n, "title")}</h3>
                    <select {onchange}>
                        <option value={LanguageType::ZhCN.lang_id()} selected={self.lang == LanguageType::ZhCN}>
                            {"中文"}
                        </option>
                        <option value={LanguageType::EnUS.lang_id()} selected={self.lang == LanguageType::EnUS}>
                            {"English"}
                        </option>
                    </select>
                </div>
                <label>{tr!(self.i18n, "label")}</label>
                <input
                    id="text"
                    type="text"
                    ref={self.text_ref.clone()}
                    value={self.state.value().to_string()} />
                <button id="copy" type="button" {onclick}>
                    {tr!(self.i18n, "copy")}
                </button>
                <span id="helpBlock" class="help-block" style={help_style}>
                    {help.unwrap_or_default()}
                </span>
            </div>
        }
    }
}
