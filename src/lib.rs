// src/lib.rs
pub mod canvas;
pub mod composer;
pub mod math;
pub mod viewer;

pub use composer::{ComposedImage, ImageComposer, ImageConfig, draw_image};
pub use viewer::{HeadlessPresenter, Presenter, WindowPresenter};
