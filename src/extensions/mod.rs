pub mod str_ext;
