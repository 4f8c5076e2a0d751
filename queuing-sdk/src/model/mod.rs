pub mod seq;

pub const SEQ_LEFT_MARK: char = '【';
pub const SEQ_RIGHT_MARK: char = '】';
