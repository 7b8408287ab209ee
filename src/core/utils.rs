use crate::core::engine::Square;

/** Walks from a square along a fixed direction, excluding the origin,
 * until the board edge. */
pub struct Ray {
    current: Option<Square>,
    step: (i8, i8),
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.current = self
            .current
            .and_then(|square| square.offset(self.step.0, self.step.1));
        self.current
    }
}

pub fn ray(origin: Square, step: (i8, i8)) -> Ray {
    Ray {
        current: Some(origin),
        step,
    }
}
