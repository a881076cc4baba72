use std::fmt;

use crate::coords::{Affine, Rect, Vec2, Viewport};
use crate::paint::Color;
use crate::scene::{DrawList, Primitive, TextCmd};
use crate::text::FontBook;

use super::{LayerId, Placement, ScreenIds, ScreenRegistry, Surface};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Screen configuration.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    pub width: f64,
    pub height: f64,
    pub background: Color,
    /// Element the screen is embedded under. `None` = standalone.
    pub parent: Option<String>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: Color::black(),
            parent: None,
        }
    }
}

impl ScreenConfig {
    pub fn sized(width: f64, height: f64) -> Self {
        Self { width, height, ..Self::default() }
    }
}

/// One pen layer: committed primitives plus the layer-wide transform.
#[derive(Debug, Clone)]
pub struct Layer {
    id: LayerId,
    name: String,
    items: DrawList,
    transform: Affine,
}

impl Layer {
    #[inline]
    pub fn id(&self) -> LayerId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn items(&self) -> &[Primitive] {
        self.items.items()
    }

    #[inline]
    pub fn transform(&self) -> Affine {
        self.transform
    }
}

/// In-memory SVG document.
///
/// Layers are kept in paint order (first = bottom). Serializing with `Display` produces a
/// complete standalone `<svg>` document.
pub struct SvgSurface {
    ids: ScreenIds,
    viewport: Viewport,
    background: Color,
    layers: Vec<Layer>,
    created: usize,
    fonts: FontBook,
}

impl SvgSurface {
    /// Creates a surface whose ids come from `registry`.
    pub fn new(config: ScreenConfig, registry: &mut ScreenRegistry) -> Self {
        let ids = registry.allocate(config.parent.as_deref());
        Self::with_ids(ids, config)
    }

    /// Creates a standalone surface without consulting a registry.
    pub fn standalone(config: ScreenConfig) -> Self {
        Self::with_ids(ScreenRegistry::standalone(), config)
    }

    fn with_ids(ids: ScreenIds, config: ScreenConfig) -> Self {
        let viewport = Viewport::new(config.width, config.height);
        if !viewport.is_valid() {
            log::warn!("screen {} created with degenerate size {}x{}", ids.screen, config.width, config.height);
        }
        Self {
            ids,
            viewport,
            background: config.background,
            layers: Vec::new(),
            created: 0,
            fonts: FontBook::new(),
        }
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Fonts used to measure text blocks.
    #[inline]
    pub fn fonts_mut(&mut self) -> &mut FontBook {
        &mut self.fonts
    }

    /// Layers in paint order.
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// Total committed primitives across all layers.
    pub fn primitive_count(&self) -> usize {
        self.layers.iter().map(|l| l.items.len()).sum()
    }

    fn position(&self, id: LayerId) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.id == id)
    }
}

impl Surface for SvgSurface {
    fn id(&self) -> &str {
        &self.ids.screen
    }

    fn group_id(&self) -> &str {
        &self.ids.group
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn layer_count(&self) -> usize {
        self.created
    }

    fn layer_order(&self) -> Vec<LayerId> {
        self.layers.iter().map(Layer::id).collect()
    }

    fn create_layer(&mut self, placement: Placement) -> LayerId {
        self.created += 1;
        let id = LayerId::new(self.created);
        let layer = Layer {
            id,
            name: self.ids.layer(self.created),
            items: DrawList::new(),
            transform: Affine::IDENTITY,
        };

        let index = match placement {
            Placement::Top => self.layers.len(),
            Placement::Bottom => 0,
            Placement::Behind(other) => self.position(other).unwrap_or_else(|| {
                log::warn!("layer {other:?} not on screen {}; placing new layer on top", self.ids.screen);
                self.layers.len()
            }),
            Placement::OnTopOf(other) => self
                .position(other)
                .map(|i| i + 1)
                .unwrap_or_else(|| {
                    log::warn!("layer {other:?} not on screen {}; placing new layer on top", self.ids.screen);
                    self.layers.len()
                }),
        };

        log::debug!("screen {}: created layer {} at {index}", self.ids.screen, layer.name);
        self.layers.insert(index, layer);
        id
    }

    fn layer_name(&self, layer: LayerId) -> Option<&str> {
        self.layer(layer).map(Layer::name)
    }

    fn append(&mut self, layer: LayerId, primitive: Primitive) {
        match self.layer_mut(layer) {
            Some(l) => l.items.push(primitive),
            None => log::warn!("dropping {} for unknown layer {layer:?}", primitive.kind()),
        }
    }

    fn clear_layer(&mut self, layer: LayerId) {
        if let Some(l) = self.layer_mut(layer) {
            l.items.clear();
        }
    }

    fn clear(&mut self) {
        for l in &mut self.layers {
            l.items.clear();
        }
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn set_layer_transform(&mut self, layer: LayerId, transform: Affine) {
        if let Some(l) = self.layer_mut(layer) {
            l.transform = transform;
        }
    }

    fn measure_text(&self, text: &TextCmd) -> Vec2 {
        self.fonts.measure_text(&text.text, &text.font, text.size, text.max_width)
    }

    fn content_bounds(&self, layer: LayerId) -> Option<Rect> {
        self.layer(layer)?.items.bounds()
    }
}

impl fmt::Display for SvgSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Viewport { width, height } = self.viewport;
        writeln!(
            f,
            r#"<svg xmlns="{SVG_NS}" id="{}" version="1.1" viewBox="0 0 {width} {height}" width="{width}" height="{height}" preserveAspectRatio="xMidYMid meet" shape-rendering="geometricPrecision">"#,
            self.ids.screen
        )?;
        writeln!(
            f,
            r#"<rect id="{}" fill="{}" x="0" y="0" width="{width}" height="{height}"/>"#,
            self.ids.background(),
            self.background
        )?;
        writeln!(f, r#"<g id="{}">"#, self.ids.group)?;
        for layer in &self.layers {
            if layer.transform.is_identity() {
                writeln!(f, r#"<g id="{}">"#, layer.name)?;
            } else {
                writeln!(f, r#"<g id="{}" transform="{}">"#, layer.name, layer.transform)?;
            }
            for item in layer.items.items() {
                writeln!(f, "{item}")?;
            }
            writeln!(f, "</g>")?;
        }
        writeln!(f, "</g>")?;
        writeln!(f, "</svg>")
    }
}
