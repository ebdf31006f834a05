use rand::Rng;

use super::super::{Cell, MazeMaker};

pub trait Backtrack {
    fn backtrack(&mut self);
}

impl<R: Rng> Backtrack for MazeMaker<'_, R> {
    fn backtrack(&mut self) {
        self.carve(Cell::ORIGIN);
        let mut stack = vec![Cell::ORIGIN];

        while let Some(current) = stack.pop() {
            if let Some(next) = self.pick_uncarved_jump(current) {
                stack.push(current);
                self.carve_between(current, next);
                self.carve(next);
                stack.push(next);
            }
        }
    }
}
