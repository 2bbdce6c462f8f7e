//! End-to-end scenarios for insertion, removal, and key recycling.

use casc_sieve::topology::{SimplicialComplex, VertexKey};

fn vk(raw: &[u64]) -> Vec<VertexKey> {
    raw.iter().map(|&r| VertexKey::new(r)).collect()
}

fn sizes(mesh: &SimplicialComplex<i32>) -> Vec<usize> {
    (0..=mesh.dim()).map(|k| mesh.size(k)).collect()
}

#[test]
fn tet_insert_materializes_all_levels() {
    let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
    mesh.insert(&vk(&[1, 2, 3, 4])).unwrap();
    assert_eq!(sizes(&mesh), vec![1, 4, 6, 4, 1]);
    assert!(mesh.exists(&vk(&[1, 2, 3, 4])));
    assert!(mesh.exists(&vk(&[2, 4])));
    mesh.check_invariants().unwrap();
}

#[test]
fn removing_an_edge_collapses_its_cofaces() {
    let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
    mesh.insert(&vk(&[1, 2, 3, 4])).unwrap();
    let removed = mesh.remove_named(&vk(&[3, 4]));
    assert_eq!(removed, 4);
    assert_eq!(sizes(&mesh), vec![1, 4, 5, 2, 0]);
    assert_eq!(mesh.get(&vk(&[1, 2, 3, 4])), None);
    assert_eq!(mesh.get(&vk(&[3, 4])), None);
    assert_eq!(mesh.get(&vk(&[1, 3, 4])), None);
    assert!(mesh.exists(&vk(&[1, 2, 3])));
    mesh.check_invariants().unwrap();
}

#[test]
fn reinsertion_is_idempotent_up_to_payload() {
    let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
    mesh.insert_with(&vk(&[1, 2, 3, 4]), 3).unwrap();
    let before = sizes(&mesh);
    let node_count = mesh.node_count();
    let s = mesh.insert_with(&vk(&[1, 2, 3, 4]), 8).unwrap();
    assert_eq!(sizes(&mesh), before);
    assert_eq!(mesh.node_count(), node_count);
    assert_eq!(mesh[s], 8);
    mesh.check_invariants().unwrap();
}

#[test]
fn insert_then_remove_restores_the_initial_state() {
    let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
    let tracker_before = mesh.key_tracker().clone();
    let s = mesh.insert(&vk(&[5, 7, 9])).unwrap();
    assert!(!mesh.key_tracker().contains(7));
    let removed = mesh.remove(s);
    // the triangle itself; its faces survive
    assert_eq!(removed, 1);
    for name in [&[5u64, 7][..], &[5, 9], &[7, 9], &[5], &[7], &[9]] {
        assert_eq!(mesh.remove_named(&vk(name)), 1);
    }
    assert_eq!(sizes(&mesh), vec![1, 0, 0, 0]);
    assert_eq!(mesh.key_tracker(), &tracker_before);
    mesh.check_invariants().unwrap();
}

#[test]
fn get_returns_the_inserted_name() {
    let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
    let s = mesh.insert(&vk(&[2, 5, 11])).unwrap();
    let got = mesh.get(&vk(&[2, 5, 11])).unwrap();
    assert_eq!(got, s);
    assert_eq!(mesh.name(got).to_vec(), vk(&[2, 5, 11]));
}

#[test]
fn size_is_bounded_by_binomials() {
    let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
    mesh.insert(&vk(&[1, 2, 3, 4])).unwrap();
    mesh.insert(&vk(&[2, 3, 4, 5])).unwrap();
    mesh.insert(&vk(&[1, 3, 5])).unwrap();
    let v = mesh.size(1);
    let binom = |n: usize, k: usize| -> usize {
        if k > n {
            return 0;
        }
        (1..=k).fold(1, |acc, i| acc * (n - i + 1) / i)
    };
    assert_eq!(mesh.size(0), 1);
    for k in 1..=mesh.dim() {
        assert!(mesh.size(k) <= binom(v, k));
    }
}

#[test]
fn every_subface_of_a_present_simplex_is_present() {
    let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
    mesh.insert(&vk(&[1, 3, 5, 7])).unwrap();
    let name = [1u64, 3, 5, 7];
    for mask in 1u32..16 {
        let sub: Vec<u64> = name
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &v)| v)
            .collect();
        assert!(mesh.exists(&vk(&sub)), "missing subset {sub:?}");
    }
}

#[test]
fn vertex_keys_recycle_smallest_first() {
    let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(4);
    mesh.insert(&vk(&[1, 2, 3, 4])).unwrap();
    mesh.remove_named(&vk(&[3, 4]));
    // vertices 3 and 4 survive the edge removal, so 0 is the smallest free
    let v = mesh.add_vertex().unwrap();
    assert_eq!(v, VertexKey::new(0));
    // inserting then removing the fresh vertex restores the allocator
    let tracker_before = mesh.key_tracker().clone();
    let w = mesh.add_vertex().unwrap();
    assert_eq!(w, VertexKey::new(5));
    let handle = mesh.get(&[w]).unwrap();
    assert_eq!(mesh.remove(handle), 1);
    assert_eq!(mesh.key_tracker(), &tracker_before);
}

#[test]
fn tracker_mirrors_the_vertex_set() {
    let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
    mesh.insert(&vk(&[2, 4, 6])).unwrap();
    for key in 0..8u64 {
        let is_vertex = mesh.exists(&vk(&[key]));
        assert_eq!(mesh.key_tracker().contains(key), !is_vertex);
    }
}

#[test]
fn random_vertex_payloads_read_back() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let trials = 100;
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut mesh: SimplicialComplex<i32> = SimplicialComplex::new(3);
    let mut expected = std::collections::HashMap::new();

    for _ in 0..trials {
        let data: i32 = rng.gen();
        let key = mesh.add_vertex_with(data).unwrap();
        expected.insert(key, data);
    }
    assert_eq!(mesh.size(1), trials);

    let mut seen = 0;
    for s in mesh.simplices(1).collect::<Vec<_>>() {
        let key = mesh.name(s)[0];
        let want = expected.get(&key).expect("every vertex was inserted here");
        assert_eq!(mesh[s], *want);
        seen += 1;
    }
    assert_eq!(seen, trials);
}
