/// Position of one rendered verse relative to the reading pane, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersePosition {
    pub verse: u32,
    pub top: i32,
}

/// Snapshot of the reading pane taken when it scrolls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub top: i32,
    /// Verses in rendering order.
    pub verses: Vec<VersePosition>,
}

/// First verse whose top edge is at or below the viewport top. Once the pane
/// has scrolled past the last verse that verse wins; an empty pane reports
/// verse 1.
pub fn topmost_visible_verse(viewport: &Viewport) -> u32 {
    let mut topmost = viewport
        .verses
        .iter()
        .find(|position| position.top >= viewport.top)
        .map(|position| position.verse)
        .unwrap_or(1);

    if let Some(last) = viewport.verses.last() {
        if last.top < viewport.top {
            topmost = last.verse;
        }
    }

    topmost
}
