pub mod backtrack;
pub mod prim;
