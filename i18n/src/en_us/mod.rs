// seq board component
pub const SEQ_BOARD: &str = r#"
title = Take a Number
label = Your number
copy = Copy
copied = { $seq } copied to clipboard
"#;
