pub mod option_ext;
