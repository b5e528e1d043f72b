/// Pointer and touch capabilities reported by the host at session start.
///
/// The media-query equivalent of `(hover: none) and (pointer: coarse)`
/// plus `navigator.maxTouchPoints`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerTraits {
    pub coarse_pointer: bool,
    pub can_hover: bool,
    pub max_touch_points: u8,
}

/// Interaction model selector.
///
/// Classified once per session and never re-evaluated; a convertible
/// flipping into tablet mode mid-session keeps its original class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    /// Coarse pointer, no hover, multi-touch: tap-to-arm model.
    Phone,
    /// Everything else: direct auto-play, click closes.
    Desktop,
}

impl DeviceClass {
    #[must_use]
    pub fn classify(traits: PointerTraits) -> Self {
        if traits.coarse_pointer && !traits.can_hover && traits.max_touch_points > 1 {
            DeviceClass::Phone
        } else {
            DeviceClass::Desktop
        }
    }

    #[must_use]
    pub fn is_phone(self) -> bool {
        matches!(self, DeviceClass::Phone)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::phone(true, false, 5, DeviceClass::Phone)]
    #[case::single_touch_kiosk(true, false, 1, DeviceClass::Desktop)]
    #[case::touch_laptop_with_hover(true, true, 10, DeviceClass::Desktop)]
    #[case::mouse_desktop(false, true, 0, DeviceClass::Desktop)]
    #[case::stylus_tablet_fine_pointer(false, false, 2, DeviceClass::Desktop)]
    fn classification(
        #[case] coarse_pointer: bool,
        #[case] can_hover: bool,
        #[case] max_touch_points: u8,
        #[case] expected: DeviceClass,
    ) {
        let traits = PointerTraits {
            coarse_pointer,
            can_hover,
            max_touch_points,
        };
        assert_eq!(DeviceClass::classify(traits), expected);
    }
}
