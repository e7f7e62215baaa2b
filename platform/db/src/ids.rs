use rand::Rng;

const ID_LEN: usize = 9;
const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Draws random base-36 ids until one is not `taken`.
pub(crate) fn fresh_id<R, F>(rng: &mut R, taken: F) -> String
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    loop {
        let candidate = random_id(rng);
        if !taken(&candidate) {
            return candidate;
        }
    }
}

fn random_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn ids_are_nine_base36_chars() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = fresh_id(&mut rng, |_| false);
        assert_eq!(id.len(), ID_LEN);
        assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn taken_ids_are_redrawn() {
        let mut probe = StdRng::seed_from_u64(42);
        let first = random_id(&mut probe);

        let mut rng = StdRng::seed_from_u64(42);
        let taken: HashSet<String> = [first.clone()].into_iter().collect();
        let id = fresh_id(&mut rng, |candidate| taken.contains(candidate));
        assert_ne!(id, first);
    }
}
