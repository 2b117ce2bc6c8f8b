/// Actions bound to the toolbar buttons, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    Brush,
    Eraser,
    SizeDec,
    SizeInc,
    Save,
    Clear,
}

impl ButtonAction {
    pub const ALL: [Self; 6] = [
        Self::Brush,
        Self::Eraser,
        Self::SizeDec,
        Self::SizeInc,
        Self::Save,
        Self::Clear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::SizeDec => "- Size",
            Self::SizeInc => "+ Size",
            Self::Save => "Save",
            Self::Clear => "Clear",
        }
    }
}
