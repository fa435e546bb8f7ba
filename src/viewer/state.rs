use serde::Serialize;

/// Position of the full-screen viewer within one album's image sequence.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    pub album_id: String,
    pub index: usize,
    pub image_count: usize,
}

impl ViewerState {
    pub fn open(album_id: String, image_count: usize) -> Self {
        Self {
            album_id,
            index: 0,
            image_count,
        }
    }

    pub fn next(&mut self) {
        self.index = if self.index + 1 == self.image_count {
            0
        } else {
            self.index + 1
        };
    }

    pub fn prev(&mut self) {
        self.index = if self.index == 0 {
            self.image_count - 1
        } else {
            self.index - 1
        };
    }

    /// Auto-advance only makes sense with more than one image.
    pub fn should_autoplay(&self) -> bool {
        self.image_count > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_past_the_last_image() {
        let mut state = ViewerState::open("a".into(), 3);
        state.next();
        state.next();
        assert_eq!(state.index, 2);
        state.next();
        assert_eq!(state.index, 0);
    }

    #[test]
    fn prev_wraps_before_the_first_image() {
        let mut state = ViewerState::open("a".into(), 3);
        state.prev();
        assert_eq!(state.index, 2);
        state.prev();
        assert_eq!(state.index, 1);
    }

    #[test]
    fn single_image_albums_stay_put_and_do_not_autoplay() {
        let mut state = ViewerState::open("a".into(), 1);
        assert!(!state.should_autoplay());
        state.next();
        assert_eq!(state.index, 0);
        state.prev();
        assert_eq!(state.index, 0);
    }
}
