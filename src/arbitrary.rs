use crate::{PathBuf, Value};
use quickcheck::{Arbitrary, Gen};

// Segments never contain a slash since `PathBuf::push_back` does not escape.
fn segment(g: &mut Gen) -> String {
    String::arbitrary(g).replace('/', "")
}

fn value(g: &mut Gen, depth: usize) -> Value {
    let pick = if depth == 0 {
        u8::arbitrary(g) % 3
    } else {
        u8::arbitrary(g) % 5
    };
    let width = usize::arbitrary(g) % 4;
    match pick {
        0 => Value::Null,
        1 => Value::from(i64::arbitrary(g)),
        2 => Value::from(String::arbitrary(g)),
        3 => (0..width).map(|_| value(g, depth - 1)).collect(),
        _ => (0..width)
            .map(|_| (segment(g), value(g, depth - 1)))
            .collect(),
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        value(g, 3)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            Self::Null => quickcheck::empty_shrinker(),
            Self::Scalar(_) => quickcheck::single_shrinker(Self::Null),
            Self::List(list) => Box::new(
                list.iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .into_iter()
                    .chain(std::iter::once(Self::Null)),
            ),
            Self::Map(map) => Box::new(
                map.iter()
                    .map(|(_, v)| v.clone())
                    .collect::<Vec<_>>()
                    .into_iter()
                    .chain(std::iter::once(Self::Null)),
            ),
        }
    }
}

impl Arbitrary for PathBuf {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = usize::arbitrary(g) % g.size().max(1);
        Self::from_segments((0..size).map(|_| segment(g)).collect::<Vec<_>>())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let segments: Vec<String> = self.segments().map(|s| s.as_str().to_owned()).collect();
        Box::new((0..segments.len()).map(move |i| {
            let subset: Vec<_> = segments
                .iter()
                .enumerate()
                .filter_map(|(j, s)| (i != j).then_some(s.clone()))
                .collect();
            Self::from_segments(subset)
        }))
    }
}
