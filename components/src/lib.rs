pub mod seq_board;
