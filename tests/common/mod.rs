use mandrake_rust::{
    error::{WidgetError, WidgetErrorCode},
    geometry::Rect,
    layout::LayoutState,
    rendering::{DrawSurface, SurfaceMetrics},
};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Resize { width: u32, height: u32, ratio: f64 },
    Clear(Rect),
    Tile { src: Rect, dst: Rect },
}

/// Records every drawing call instead of touching a canvas.
pub struct RecordingSurface {
    pub metrics: SurfaceMetrics,
    pub calls: Vec<DrawCall>,
    pub broken_image: bool,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        RecordingSurface {
            metrics: SurfaceMetrics {
                width,
                height,
                pixel_ratio,
            },
            calls: Vec::new(),
            broken_image: false,
        }
    }

    pub fn tiles(&self) -> Vec<(Rect, Rect)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Tile { src, dst } => Some((*src, *dst)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn measure(&self) -> SurfaceMetrics {
        self.metrics
    }

    fn resize_backing(&mut self, layout: &LayoutState) -> Result<(), WidgetError> {
        self.calls.push(DrawCall::Resize {
            width: layout.backing_width,
            height: layout.backing_height,
            ratio: layout.pixel_ratio,
        });
        Ok(())
    }

    fn clear_rect(&mut self, rect: &Rect) {
        self.calls.push(DrawCall::Clear(*rect));
    }

    fn draw_tile(&mut self, src: &Rect, dst: &Rect) -> Result<(), WidgetError> {
        if self.broken_image {
            return Err(WidgetError::new_code(
                WidgetErrorCode::Surface,
                "image is broken".to_string(),
            ));
        }
        self.calls.push(DrawCall::Tile {
            src: *src,
            dst: *dst,
        });
        Ok(())
    }
}
