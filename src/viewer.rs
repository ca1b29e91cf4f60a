// src/viewer.rs

use crate::canvas::RasterCanvas;
use crate::math::error::SpyralResult;
use bevy::log::{LogPlugin, info};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::window::WindowResolution;
use image::RgbaImage;

/// Zeigt ein fertiges Bild an.
pub trait Presenter {
    fn present(&mut self, canvas: &RasterCanvas) -> SpyralResult<()>;
}

/// Zeigt nichts an. Für Tests und Bibliotheksnutzung ohne Fenster.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessPresenter;

impl Presenter for HeadlessPresenter {
    fn present(&mut self, canvas: &RasterCanvas) -> SpyralResult<()> {
        info!(
            "Headless: skipping display of {}x{} image ({} strokes)",
            canvas.width(),
            canvas.height(),
            canvas.strokes().len()
        );
        Ok(())
    }
}

/// Öffnet ein Bevy-Fenster in Bildgröße und blockiert, bis es geschlossen wird.
///
/// Bevy's `LogPlugin` bleibt deaktiviert, der Subscriber wird vom Binary installiert.
/// Pro Prozess kann nur ein Fenster geöffnet werden (eine winit-Event-Loop).
#[derive(Debug, Clone)]
pub struct WindowPresenter {
    pub title: String,
}

impl Default for WindowPresenter {
    fn default() -> Self {
        Self {
            title: "spyral".to_string(),
        }
    }
}

impl WindowPresenter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

#[derive(Resource)]
struct CanvasImage(RgbaImage);

impl Presenter for WindowPresenter {
    fn present(&mut self, canvas: &RasterCanvas) -> SpyralResult<()> {
        let window = Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(canvas.width() as f32, canvas.height() as f32),
            resizable: false,
            ..default()
        };

        App::new()
            .add_plugins(
                DefaultPlugins
                    .set(WindowPlugin {
                        primary_window: Some(window),
                        ..default()
                    })
                    .disable::<LogPlugin>(),
            )
            .insert_resource(ClearColor(Color::WHITE))
            .insert_resource(CanvasImage(canvas.image().clone()))
            .add_systems(Startup, spawn_canvas_sprite)
            .run();

        Ok(())
    }
}

fn spawn_canvas_sprite(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    canvas: Res<CanvasImage>,
) {
    let (width, height) = canvas.0.dimensions();
    let texture = Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        canvas.0.as_raw().clone(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );

    commands.spawn(Camera2dBundle::default());
    commands.spawn(SpriteBundle {
        texture: images.add(texture),
        ..default()
    });
}
