/// A validated move of one item inside an ordered sequence.
///
/// `to` is interpreted against the sequence with the item already taken out,
/// so both indices always lie in `[0, len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionMove {
    pub from: usize,
    pub to: usize,
}

impl PositionMove {
    /// Validates a move request. Returns `None` when either index is outside
    /// `[0, len - 1]`; `to == len` is out of bounds, not an append.
    #[must_use]
    pub fn resolve(len: usize, from: usize, to: usize) -> Option<Self> {
        if from >= len || to >= len {
            return None;
        }
        Some(Self { from, to })
    }

    #[must_use]
    pub fn is_noop(self) -> bool {
        self.from == self.to
    }

    /// Applies the move in place, shifting the items in between by one.
    pub fn apply<T>(self, items: &mut [T]) {
        if self.from < self.to {
            items[self.from..=self.to].rotate_left(1);
        } else if self.to < self.from {
            items[self.to..=self.from].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PositionMove;

    #[test]
    fn move_to_front_shifts_others_back() {
        let mut items = vec!['a', 'b', 'c'];
        PositionMove::resolve(items.len(), 2, 0)
            .expect("in bounds")
            .apply(&mut items);
        assert_eq!(items, vec!['c', 'a', 'b']);
    }

    #[test]
    fn move_to_back_shifts_others_forward() {
        let mut items = vec!['c', 'a', 'b'];
        PositionMove::resolve(items.len(), 0, 2)
            .expect("in bounds")
            .apply(&mut items);
        assert_eq!(items, vec!['a', 'b', 'c']);
    }

    #[test]
    fn index_equal_to_len_is_rejected() {
        assert_eq!(PositionMove::resolve(3, 2, 3), None);
        assert_eq!(PositionMove::resolve(3, 3, 0), None);
        assert_eq!(PositionMove::resolve(0, 0, 0), None);
    }

    #[test]
    fn same_index_is_a_noop() {
        let mut items = vec![1, 2, 3];
        let mv = PositionMove::resolve(3, 1, 1).expect("in bounds");
        assert!(mv.is_noop());
        mv.apply(&mut items);
        assert_eq!(items, vec![1, 2, 3]);
    }
}
