/// A colour, expressed in RGB or greyscale colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// RGB colour; r, g, b range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// Greyscale colour; g ranges from 0.0 (black) to 1.0 (white)
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new greyscale colour, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Create a new greyscale colour, g ranges from 0 to 255
    pub fn new_grey_bytes(g: u8) -> Colour {
        Colour::Grey {
            g: g as f32 / 255.0,
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<[T; 3]> for Colour {
    fn from(c: [T; 3]) -> Self {
        let [r, g, b] = c;
        Colour::RGB {
            r: r.into(),
            g: g.into(),
            b: b.into(),
        }
    }
}

impl From<Colour> for image::Rgb<u8> {
    fn from(colour: Colour) -> Self {
        fn byte(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        match colour {
            Colour::RGB { r, g, b } => image::Rgb([byte(r), byte(g), byte(b)]),
            Colour::Grey { g } => image::Rgb([byte(g); 3]),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// The classic warm paper tone, (255, 228, 196) in bytes
    pub const BISQUE: Colour = Colour::RGB {
        r: 1.0,
        g: 228.0 / 255.0,
        b: 196.0 / 255.0,
    };
    pub const LINEN: Colour = Colour::RGB {
        r: 250.0 / 255.0,
        g: 240.0 / 255.0,
        b: 230.0 / 255.0,
    };
    pub const IVORY: Colour = Colour::RGB {
        r: 1.0,
        g: 1.0,
        b: 240.0 / 255.0,
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn byte_constructor_round_trips_through_pixels() {
        let colour = Colour::new_rgb_bytes(255, 228, 196);
        assert_eq!(image::Rgb::from(colour), image::Rgb([255u8, 228, 196]));
    }

    #[test]
    fn palette_bisque_matches_bytes() {
        assert_eq!(
            image::Rgb::from(colours::BISQUE),
            image::Rgb([255u8, 228, 196])
        );
    }

    #[test]
    fn grey_expands_to_all_channels() {
        assert_eq!(
            image::Rgb::from(Colour::new_grey_bytes(40)),
            image::Rgb([40u8, 40, 40])
        );
    }

    #[test]
    fn out_of_range_components_clamp() {
        let colour = Colour::new_rgb(1.5, -0.25, 0.5);
        assert_eq!(image::Rgb::from(colour), image::Rgb([255u8, 0, 128]));
    }

    #[test]
    fn tuples_and_arrays_convert_to_colours() {
        let from_tuple: Colour = (1.0f32, 0.5, 0.25).into();
        assert_eq!(from_tuple, Colour::new_rgb(1.0, 0.5, 0.25));

        let from_array: Colour = [0.0f32, 0.25, 1.0].into();
        assert_eq!(from_array, Colour::new_rgb(0.0, 0.25, 1.0));
    }

    #[test]
    fn float_and_byte_greys_agree_at_the_ends() {
        assert_eq!(
            image::Rgb::from(Colour::new_grey(0.0)),
            image::Rgb::from(Colour::new_grey_bytes(0))
        );
        assert_eq!(
            image::Rgb::from(Colour::new_grey(1.0)),
            image::Rgb::from(Colour::new_grey_bytes(255))
        );
    }
}
