pub mod keyboard;
pub mod page;
pub mod pointer;
