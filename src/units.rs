use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, Sub, SubAssign, Sum};

/// A distance in pixels. All layout math is carried out in `Px` values and
/// only truncated to whole device pixels when glyphs are painted onto the
/// canvas
#[derive(
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Debug,
    Default,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Mul,
    Div,
    Sum,
    Display,
    From,
    Into,
)]
pub struct Px(pub f32);

impl Px {
    /// Round to the nearest whole pixel, for handing coordinates to the
    /// rasterizer
    pub fn round(self) -> i32 {
        self.0.round() as i32
    }
}
