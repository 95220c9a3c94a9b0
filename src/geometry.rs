#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
  pub left: f64,
  pub top: f64,
  pub right: f64,
  pub bottom: f64,
}

impl Rect {
  pub const fn from(l: f64, t: f64, r: f64, b: f64) -> Rect {
    return Rect { left: l, top: t, right: r, bottom: b };
  }

  pub const fn from_size(x: f64, y: f64, width: f64, height: f64) -> Rect {
    return Rect::from(x, y, x + width, y + height);
  }

  pub const fn width(&self) -> f64 {
    return self.right - self.left;
  }

  pub const fn height(&self) -> f64 {
    return self.bottom - self.top;
  }
}
