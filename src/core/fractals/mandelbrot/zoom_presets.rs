use crate::core::data::viewport::Viewport;

/// Small viewports near the boundary that render well in text mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomPreset {
    CuspEdge,
    ValleyNeck,
    PeriodTwoBulb,
    WestBulb,
    ValleyWide,
    #[default]
    Valley,
    ValleyUpper,
    ValleySpiral,
    ValleySpiralCore,
}

impl ZoomPreset {
    pub const ALL: &'static [Self] = &[
        Self::Valley,
        Self::CuspEdge,
        Self::ValleyNeck,
        Self::PeriodTwoBulb,
        Self::WestBulb,
        Self::ValleyWide,
        Self::ValleyUpper,
        Self::ValleySpiral,
        Self::ValleySpiralCore,
    ];

    #[must_use]
    pub const fn viewport(self) -> Viewport {
        match self {
            Self::CuspEdge => Viewport::from_bounds(0.26, 0.0, 0.27, 0.01),
            Self::ValleyNeck => Viewport::from_bounds(-0.76, 0.01, -0.74, 0.03),
            Self::PeriodTwoBulb => Viewport::from_bounds(-1.26, 0.01, -1.24, 0.03),
            Self::WestBulb => Viewport::from_bounds(-1.0, -0.25, -0.5, 0.25),
            Self::ValleyWide => Viewport::from_bounds(-0.8, 0.0, -0.7, 0.25),
            Self::Valley => Viewport::from_bounds(-0.75, 0.1, -0.7, 0.25),
            Self::ValleyUpper => Viewport::from_bounds(-0.75, 0.2, -0.7, 0.25),
            Self::ValleySpiral => Viewport::from_bounds(-0.74, 0.23, -0.72, 0.25),
            Self::ValleySpiralCore => Viewport::from_bounds(-0.735, 0.237, -0.73, 0.24),
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CuspEdge => "Cusp edge",
            Self::ValleyNeck => "Seahorse valley neck",
            Self::PeriodTwoBulb => "Period-two bulb",
            Self::WestBulb => "West bulb",
            Self::ValleyWide => "Seahorse valley, wide",
            Self::Valley => "Seahorse valley",
            Self::ValleyUpper => "Seahorse valley, upper",
            Self::ValleySpiral => "Seahorse spiral",
            Self::ValleySpiralCore => "Seahorse spiral core",
        }
    }
}

impl std::fmt::Display for ZoomPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
