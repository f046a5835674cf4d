#![allow(non_snake_case)]
#![allow(unused_parens)]
#![allow(unused_doc_comments)]
#![allow(non_camel_case_types)]
pub mod dao;
pub mod helpers;
pub mod indexer;
pub mod views;
