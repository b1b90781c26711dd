pub mod document;
pub mod fragment;
