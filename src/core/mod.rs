pub mod batch;
pub mod formatter;
pub mod grouper;
pub mod words;
