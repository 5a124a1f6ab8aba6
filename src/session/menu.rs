/// Where a pointer press landed, as classified by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// On a verse; verse presses are routed to the menu toggle instead.
    Verse,
    /// Inside the rendered context menu.
    Menu,
    Elsewhere,
}

/// The single verse context menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextMenu {
    pub visible: bool,
    pub x: u16,
    pub y: u16,
    pub verse: Option<u32>,
}

impl ContextMenu {
    /// Open the menu on `verse`, or close it if it is already open there.
    pub fn toggle_for(&mut self, verse: u32, x: u16, y: u16) {
        if self.visible && self.verse == Some(verse) {
            self.hide();
        } else {
            *self = Self {
                visible: true,
                x,
                y,
                verse: Some(verse),
            };
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Verse the open menu acts on.
    pub fn target(&self) -> Option<u32> {
        if self.visible {
            self.verse
        } else {
            None
        }
    }

    pub fn dismiss_for(&mut self, target: PointerTarget) {
        if self.visible && target == PointerTarget::Elsewhere {
            self.hide();
        }
    }
}
