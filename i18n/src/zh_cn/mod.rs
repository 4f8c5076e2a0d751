// seq board component
pub const SEQ_BOARD: &str = r#"
title = 排队取号
label = 您的号码
copy = 复制
copied = { $seq }已拷贝到剪切板
"#;
