use crate::geom::Object;

use std::cmp::Ordering;
use std::ops::Index;
use std::ptr;

/// A ray parameter paired with the object the ray crossed there.
#[derive(Copy, Clone, Debug)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a Object,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a Object) -> Intersection<'a> {
        Intersection {t: t, object: object}
    }
}

impl<'a> PartialEq for Intersection<'a> {
    fn eq(&self, other: &Intersection<'a>) -> bool {
        self.t == other.t && ptr::eq(self.object, other.object)
    }
}

/// All intersections of one ray, in ascending t. Equal t values keep the order
/// in which they were added.
#[derive(Clone, Debug, Default)]
pub struct Intersections<'a> {
    list: Vec<Intersection<'a>>,
}

fn by_t(a: &Intersection, b: &Intersection) -> Ordering {
    a.t.partial_cmp(&b.t).unwrap_or(Ordering::Equal)
}

impl<'a> Intersections<'a> {
    pub fn new(mut list: Vec<Intersection<'a>>) -> Intersections<'a> {
        list.sort_by(by_t);
        Intersections {list: list}
    }

    pub fn empty() -> Intersections<'a> {
        Intersections {list: Vec::new()}
    }

    /// Merges another sorted set into this one.
    pub fn extend(&mut self, other: Intersections<'a>) {
        self.list.extend(other.list);
        self.list.sort_by(by_t);
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection<'a>> {
        self.list.iter()
    }

    pub fn as_slice(&self) -> &[Intersection<'a>] {
        &self.list
    }

    /// Position of the hit: the first intersection with t >= 0.
    pub fn hit_index(&self) -> Option<usize> {
        self.list.iter().position(|i| i.t >= 0.0)
    }

    pub fn hit(&self) -> Option<&Intersection<'a>> {
        self.hit_index().map(|i| &self.list[i])
    }
}

impl<'a> Index<usize> for Intersections<'a> {
    type Output = Intersection<'a>;

    fn index(&self, i: usize) -> &Intersection<'a> {
        &self.list[i]
    }
}

impl<'a, 'b> IntoIterator for &'b Intersections<'a> {
    type Item = &'b Intersection<'a>;
    type IntoIter = std::slice::Iter<'b, Intersection<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}
