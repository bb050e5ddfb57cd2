pub use self::{dist::*, map::*, route::*, util::*};

mod dist;
mod map;
mod route;
mod util;
