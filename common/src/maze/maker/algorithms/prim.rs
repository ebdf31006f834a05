use rand::Rng;

use super::super::{Cell, MazeMaker};

pub trait Prim {
    fn prim(&mut self);
}

// A room that could be carved next, remembered with the carved room it was
// reached from so the wall between them can be opened.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    target: Cell,
    source: Cell,
}

impl<R: Rng> Prim for MazeMaker<'_, R> {
    fn prim(&mut self) {
        self.carve(Cell::ORIGIN);

        let mut frontier = Vec::new();
        add_frontier(self, Cell::ORIGIN, &mut frontier);

        while let Some(FrontierEntry { target, source }) = pick_out_entry(self, &mut frontier) {
            // The same room can be queued from several sources; only the first pick carves it.
            if self.is_carved(target) {
                continue;
            }

            self.carve(target);
            self.carve_between(source, target);
            add_frontier(self, target, &mut frontier);
        }
    }
}

fn add_frontier<R: Rng>(maze: &MazeMaker<'_, R>, source: Cell, frontier: &mut Vec<FrontierEntry>) {
    for target in maze.get_jumps(source) {
        if !maze.is_carved(target) {
            frontier.push(FrontierEntry { target, source });
        }
    }
}

fn pick_out_entry<R: Rng>(
    maze: &mut MazeMaker<'_, R>,
    frontier: &mut Vec<FrontierEntry>,
) -> Option<FrontierEntry> {
    if frontier.is_empty() {
        return None;
    }

    let i = maze.pick_index(frontier.len());
    Some(frontier.swap_remove(i))
}
