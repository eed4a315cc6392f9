pub mod emoji_properties;
