pub mod html;
pub mod mime;
