//! Story Viewer State Machine
//!
//! `Closed` or `Open { story_id, index }`. The viewer never owns a story; it
//! remembers which one is open and how many slides it had when opened, and
//! callers look the story up again to render it.
//!
//! Navigation wraps around inside the story: Next on the last slide shows the
//! first one again, Previous on the first shows the last.

use log::debug;

use crate::domain::Story;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open {
        story_id: String,
        index: usize,
        total: usize,
    },
}

/// Fill state of one progress segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFill {
    /// Already shown
    Complete,
    /// Currently shown
    Active,
    /// Not reached yet
    Unfilled,
}

impl SegmentFill {
    /// Bar width in percent. The active slide is drawn full since there is
    /// no playback timer.
    pub fn percent(&self) -> u8 {
        match self {
            SegmentFill::Complete | SegmentFill::Active => 100,
            SegmentFill::Unfilled => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoryViewer {
    state: ViewerState,
}

impl StoryViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    pub fn story_id(&self) -> Option<&str> {
        match &self.state {
            ViewerState::Open { story_id, .. } => Some(story_id),
            ViewerState::Closed => None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            ViewerState::Open { index, .. } => Some(index),
            ViewerState::Closed => None,
        }
    }

    /// Open `story` at its first slide.
    ///
    /// A story without slides is refused and the viewer ends up closed.
    /// Returns whether the viewer is open afterwards.
    pub fn open(&mut self, story: &Story) -> bool {
        if story.is_empty() {
            debug!("viewer: refusing to open empty story {}", story.id);
            self.state = ViewerState::Closed;
            return false;
        }
        debug!("viewer: open {} ({} items)", story.id, story.len());
        self.state = ViewerState::Open {
            story_id: story.id.clone(),
            index: 0,
            total: story.len(),
        };
        true
    }

    /// Open by id from a list of stories; unknown ids behave like empty stories
    pub fn open_by_id(&mut self, stories: &[Story], story_id: &str) -> bool {
        match stories.iter().find(|s| s.id == story_id) {
            Some(story) => self.open(story),
            None => {
                debug!("viewer: unknown story {}", story_id);
                self.state = ViewerState::Closed;
                false
            }
        }
    }

    pub fn next(&mut self) {
        if let ViewerState::Open { index, total, .. } = &mut self.state {
            *index = (*index + 1) % *total;
        }
    }

    pub fn previous(&mut self) {
        if let ViewerState::Open { index, total, .. } = &mut self.state {
            *index = (*index + *total - 1) % *total;
        }
    }

    pub fn close(&mut self) {
        if self.is_open() {
            debug!("viewer: close");
        }
        self.state = ViewerState::Closed;
    }

    /// One entry per slide; empty when closed
    pub fn segments(&self) -> Vec<SegmentFill> {
        match self.state {
            ViewerState::Open { index, total, .. } => (0..total)
                .map(|i| match i.cmp(&index) {
                    std::cmp::Ordering::Less => SegmentFill::Complete,
                    std::cmp::Ordering::Equal => SegmentFill::Active,
                    std::cmp::Ordering::Greater => SegmentFill::Unfilled,
                })
                .collect(),
            ViewerState::Closed => Vec::new(),
        }
    }

    /// Progress bar and arrows are only shown for multi-slide stories
    pub fn shows_navigation(&self) -> bool {
        matches!(self.state, ViewerState::Open { total, .. } if total > 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StoryItem, User};

    fn make_story(items: usize) -> Story {
        let items = (0..items).map(|i| StoryItem::image(format!("{}.png", i))).collect();
        Story::new(User::new("u1", "alice"), items, None)
    }

    #[test]
    fn test_starts_closed() {
        let viewer = StoryViewer::new();
        assert_eq!(viewer.state(), &ViewerState::Closed);
        assert!(viewer.segments().is_empty());
    }

    #[test]
    fn test_next_n_times_cycles_back() {
        for n in 1..=7 {
            let story = make_story(n);
            for start in 0..n {
                let mut viewer = StoryViewer::new();
                viewer.open(&story);
                for _ in 0..start {
                    viewer.next();
                }
                assert_eq!(viewer.current_index(), Some(start));
                for _ in 0..n {
                    viewer.next();
                }
                assert_eq!(viewer.current_index(), Some(start), "n={} start={}", n, start);
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        for n in 1..=6 {
            let story = make_story(n);
            let mut viewer = StoryViewer::new();
            viewer.open(&story);
            for step in 0..n {
                let before = viewer.current_index();
                viewer.next();
                viewer.previous();
                assert_eq!(viewer.current_index(), before);
                viewer.previous();
                viewer.next();
                assert_eq!(viewer.current_index(), before);
                for _ in 0..=step {
                    viewer.next();
                }
            }
        }
    }

    #[test]
    fn test_wraparound_both_ways() {
        let story = make_story(3);
        let mut viewer = StoryViewer::new();
        viewer.open(&story);
        viewer.previous();
        assert_eq!(viewer.current_index(), Some(2));
        viewer.next();
        assert_eq!(viewer.current_index(), Some(0));
    }

    #[test]
    fn test_reopen_resets_index() {
        let story = make_story(4);
        let mut viewer = StoryViewer::new();
        viewer.open(&story);
        viewer.next();
        viewer.next();
        assert_eq!(viewer.current_index(), Some(2));

        viewer.open(&story);
        assert_eq!(viewer.current_index(), Some(0));

        viewer.next();
        viewer.close();
        viewer.open(&story);
        assert_eq!(viewer.current_index(), Some(0));
    }

    #[test]
    fn test_empty_story_never_opens() {
        let empty = make_story(0);
        let mut viewer = StoryViewer::new();
        assert!(!viewer.open(&empty));
        assert!(!viewer.is_open());

        let full = make_story(2);
        viewer.open(&full);
        assert!(!viewer.open(&empty));
        assert_eq!(viewer.state(), &ViewerState::Closed);
    }

    #[test]
    fn test_open_by_unknown_id_stays_closed() {
        let stories = vec![make_story(2)];
        let mut viewer = StoryViewer::new();
        assert!(!viewer.open_by_id(&stories, "story_missing"));
        assert!(viewer.open_by_id(&stories, &stories[0].id));
        assert_eq!(viewer.story_id(), Some(stories[0].id.as_str()));
    }

    #[test]
    fn test_navigation_on_closed_is_noop() {
        let mut viewer = StoryViewer::new();
        viewer.next();
        viewer.previous();
        assert_eq!(viewer.state(), &ViewerState::Closed);
    }

    #[test]
    fn test_close_discards_index() {
        let mut viewer = StoryViewer::new();
        viewer.open(&make_story(3));
        viewer.next();
        viewer.close();
        assert_eq!(viewer.current_index(), None);
        assert_eq!(viewer.story_id(), None);
    }

    #[test]
    fn test_segments_follow_index() {
        let mut viewer = StoryViewer::new();
        viewer.open(&make_story(4));
        viewer.next();
        viewer.next();

        let segments = viewer.segments();
        assert_eq!(
            segments,
            vec![
                SegmentFill::Complete,
                SegmentFill::Complete,
                SegmentFill::Active,
                SegmentFill::Unfilled
            ]
        );
        let widths: Vec<u8> = segments.iter().map(|s| s.percent()).collect();
        assert_eq!(widths, vec![100, 100, 100, 0]);
    }

    #[test]
    fn test_single_item_hides_navigation() {
        let mut viewer = StoryViewer::new();
        viewer.open(&make_story(1));
        assert!(!viewer.shows_navigation());
        viewer.next();
        assert_eq!(viewer.current_index(), Some(0));

        viewer.open(&make_story(2));
        assert!(viewer.shows_navigation());
    }
}
