pub mod text_lookup;
