use serde::Serialize;

/// Which of the two buffer layers is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VisibleLayer {
    Front,
    Back,
}

/// Double-buffered cycle state over one album's image sequence.
///
/// The visible layer always shows `images[index]`; once the crossfade has
/// finished, the hidden layer is preloaded with the following image so the
/// next flip never reveals a blank frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselState {
    image_count: usize,
    index: usize,
    front_index: usize,
    back_index: usize,
    visible: VisibleLayer,
}

impl CarouselState {
    pub fn new(image_count: usize) -> Self {
        Self {
            image_count,
            index: 0,
            front_index: 0,
            back_index: if image_count > 1 { 1 } else { 0 },
            visible: VisibleLayer::Front,
        }
    }

    /// Albums with a single image never cycle.
    pub fn should_cycle(&self) -> bool {
        self.image_count > 1
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn visible(&self) -> VisibleLayer {
        self.visible
    }

    pub fn visible_index(&self) -> usize {
        match self.visible {
            VisibleLayer::Front => self.front_index,
            VisibleLayer::Back => self.back_index,
        }
    }

    pub fn hidden_index(&self) -> usize {
        match self.visible {
            VisibleLayer::Front => self.back_index,
            VisibleLayer::Back => self.front_index,
        }
    }

    /// Tick: step the logical index forward and flip which layer shows.
    pub fn advance(&mut self) {
        if !self.should_cycle() {
            return;
        }
        self.index = (self.index + 1) % self.image_count;
        self.visible = match self.visible {
            VisibleLayer::Front => VisibleLayer::Back,
            VisibleLayer::Back => VisibleLayer::Front,
        };
    }

    /// Crossfade follow-up: point the hidden layer at the image after the
    /// current one, ready for the next flip.
    pub fn preload_hidden(&mut self) {
        if !self.should_cycle() {
            return;
        }
        let upcoming = (self.index + 1) % self.image_count;
        match self.visible {
            VisibleLayer::Front => self.back_index = upcoming,
            VisibleLayer::Back => self.front_index = upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_image_albums_do_not_cycle() {
        let mut state = CarouselState::new(1);
        assert!(!state.should_cycle());

        state.advance();
        state.preload_hidden();
        assert_eq!(state.index(), 0);
        assert_eq!(state.visible(), VisibleLayer::Front);
        assert_eq!(state.visible_index(), 0);
        assert_eq!(state.hidden_index(), 0);
    }

    #[test]
    fn first_tick_reveals_the_preloaded_second_image() {
        let mut state = CarouselState::new(3);
        assert_eq!(state.visible_index(), 0);
        assert_eq!(state.hidden_index(), 1);

        state.advance();
        assert_eq!(state.index(), 1);
        assert_eq!(state.visible(), VisibleLayer::Back);
        assert_eq!(state.visible_index(), 1);
    }

    #[test]
    fn visible_layer_always_matches_the_logical_index() {
        let mut state = CarouselState::new(4);
        for _ in 0..12 {
            state.advance();
            assert_eq!(state.visible_index(), state.index());
            state.preload_hidden();
            assert_eq!(state.hidden_index(), (state.index() + 1) % 4);
        }
    }

    #[test]
    fn index_wraps_past_the_last_image() {
        let mut state = CarouselState::new(2);
        state.advance();
        state.preload_hidden();
        assert_eq!(state.index(), 1);

        state.advance();
        state.preload_hidden();
        assert_eq!(state.index(), 0);
    }
}
