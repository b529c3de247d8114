/// How the carousel should render for a given number of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselLayout {
    Empty,
    Single,
    Slides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn layout(&self) -> CarouselLayout {
        match self.len {
            0 => CarouselLayout::Empty,
            1 => CarouselLayout::Single,
            _ => CarouselLayout::Slides,
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
        }
    }

    /// Jumps to `index`; out-of-range values are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// The same position over a list that now holds `len` images, clamped to the last one.
    pub fn resized(self, len: usize) -> Self {
        Self {
            len,
            index: self.index.min(len.saturating_sub(1)),
        }
    }

    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ends() {
        let mut carousel = Carousel::new(3);
        carousel.previous();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.counter(), "3 / 3");
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(4);
        carousel.go_to(2);
        assert_eq!(carousel.index(), 2);
        carousel.go_to(4);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_resized_keeps_counter_in_range() {
        let mut carousel = Carousel::new(5);
        carousel.go_to(4);

        let shrunk = carousel.resized(3);
        assert_eq!(shrunk.index(), 2);
        assert_eq!(shrunk.counter(), "3 / 3");

        let grown = carousel.resized(8);
        assert_eq!(grown.counter(), "5 / 8");

        let emptied = carousel.resized(0);
        assert_eq!(emptied.index(), 0);
        assert_eq!(emptied.layout(), CarouselLayout::Empty);
    }

    #[test]
    fn test_degenerate_layouts() {
        let mut empty = Carousel::new(0);
        empty.next();
        empty.previous();
        assert_eq!(empty.layout(), CarouselLayout::Empty);
        assert_eq!(empty.index(), 0);
        assert_eq!(Carousel::new(1).layout(), CarouselLayout::Single);
        assert_eq!(Carousel::new(2).layout(), CarouselLayout::Slides);
    }
}
