use crate::headers::SizeHeader;

/// Which of the two frame layouts a caller is producing or consuming.
///
/// Frames do not describe themselves: the same layout must be chosen on both
/// sides. Decoding with the other layout is unchecked misuse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FrameLayout {
    /// `<codec output>`
    #[default]
    Headerless,
    /// `<u64 LE original length><codec output>`
    Headered,
}

impl FrameLayout {
    pub fn has_header(self) -> bool {
        matches!(self, FrameLayout::Headered)
    }

    pub fn header_len(self) -> usize {
        match self {
            FrameLayout::Headerless => 0,
            FrameLayout::Headered => SizeHeader::LEN,
        }
    }
}

impl From<bool> for FrameLayout {
    fn from(with_header: bool) -> Self {
        if with_header {
            FrameLayout::Headered
        } else {
            FrameLayout::Headerless
        }
    }
}
