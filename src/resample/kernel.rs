use std::{f64::consts::PI, str::FromStr};

/// Lobe count used by [`Kernel::default`] and the bare `lanczos` name.
pub const LANCZOS_DEFAULT_RADIUS: u32 = 3;

/// Catmull-Rom style cubic coefficient.
const BICUBIC_A: f64 = -0.5;

/// Resampling filter selected per resize call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kernel {
    /// Source pixel at `floor(d * src / dst)`; exact block replication on
    /// integer upscales.
    Nearest,
    /// Triangle filter, support 1.
    Bilinear,
    /// Cubic convolution with `a = -0.5`, support 2.
    Bicubic,
    /// Windowed sinc, support `radius` (lobes).
    Lanczos { radius: u32 },
}

impl Default for Kernel {
    fn default() -> Self {
        Self::lanczos3()
    }
}

impl Kernel {
    pub const fn lanczos3() -> Self {
        Self::Lanczos {
            radius: LANCZOS_DEFAULT_RADIUS,
        }
    }

    /// Half-width of the filter at scale 1, in source pixels.
    pub fn support(self) -> f64 {
        match self {
            Self::Nearest => 0.5,
            Self::Bilinear => 1.0,
            Self::Bicubic => 2.0,
            Self::Lanczos { radius } => f64::from(radius.max(1)),
        }
    }

    /// Filter weight at distance `x` (in source pixels at scale 1).
    pub fn weight(self, x: f64) -> f64 {
        let ax = x.abs();
        match self {
            Self::Nearest => {
                if ax < 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Bilinear => (1.0 - ax).max(0.0),
            Self::Bicubic => {
                let a = BICUBIC_A;
                if ax < 1.0 {
                    ((a + 2.0) * ax - (a + 3.0)) * ax * ax + 1.0
                } else if ax < 2.0 {
                    ((a * ax - 5.0 * a) * ax + 8.0 * a) * ax - 4.0 * a
                } else {
                    0.0
                }
            }
            Self::Lanczos { radius } => {
                let r = f64::from(radius.max(1));
                if ax < r { sinc(ax) * sinc(ax / r) } else { 0.0 }
            }
        }
    }
}

fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let px = PI * x;
    px.sin() / px
}

impl FromStr for Kernel {
    type Err = String;

    /// `nearest`, `bilinear`, `bicubic`, `lanczos` (3 lobes) or `lanczosN`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "nearest" => return Ok(Self::Nearest),
            "bilinear" => return Ok(Self::Bilinear),
            "bicubic" => return Ok(Self::Bicubic),
            "lanczos" => return Ok(Self::lanczos3()),
            _ => {}
        }
        if let Some(n) = name.strip_prefix("lanczos")
            && let Ok(radius) = n.parse::<u32>()
            && radius > 0
        {
            return Ok(Self::Lanczos { radius });
        }
        Err(format!(
            "unknown resampling kernel '{s}' (expected nearest|bilinear|bicubic|lanczos)"
        ))
    }
}

impl std::fmt::Display for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nearest => f.write_str("nearest"),
            Self::Bilinear => f.write_str("bilinear"),
            Self::Bicubic => f.write_str("bicubic"),
            Self::Lanczos {
                radius: LANCZOS_DEFAULT_RADIUS,
            } => f.write_str("lanczos"),
            Self::Lanczos { radius } => write!(f, "lanczos{radius}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resample/kernel.rs"]
mod tests;
