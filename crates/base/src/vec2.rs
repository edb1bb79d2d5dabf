use std::{
    fmt,
    ops::Mul,
};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl<T: Default> Default for Vec2<T> {
    fn default() -> Self {
        Self {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Default> Vec2<T> {
    pub fn zero() -> Self {
        Self::default()
    }
}

// --- Image sizes ---

impl<T: Mul<Output = T> + Copy> Vec2<T> {
    /// Number of cells in a `x` by `y` grid.
    pub fn area(self) -> T {
        self.x * self.y
    }
}

impl<T: PartialOrd + Default> Vec2<T> {
    /// True if `point` lies inside `[0, x) x [0, y)`.
    pub fn contains(&self, point: Vec2<T>) -> bool {
        let zero = T::default();
        point.x >= zero && point.y >= zero && point.x < self.x && point.y < self.y
    }
}
