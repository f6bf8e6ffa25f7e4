//! End-to-end scenarios: chain in, conformation and contact count out.

use hpfold_core::{Chain, Position, RelativeStep};
use hpfold_engine::{
    analyze, classify_steps, DirectionalEngine, PlacementEngine, SampleOutcome, Sampler,
    SamplerConfig, StochasticEngine, TurnSequence,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn stochastic_hhpph_starts_at_the_center_of_a_10x10_lattice() {
    let chain = Chain::parse("HHPPH").unwrap();
    let engine = StochasticEngine::new();
    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let conformation = engine.generate(&chain, &mut rng).unwrap();

        assert_eq!(conformation.lattice().shape(), (10, 10));
        assert!(conformation.residues_placed() <= 5);
        assert_eq!(conformation.placements()[0].position, Position::new(5, 5));
    }
}

#[test]
fn all_straight_directional_walk_is_a_line_with_no_bonds() {
    // start + four straights: a 5-cell line east of the center. No two
    // H residues can touch except consecutively, and those are
    // covalent, so the bond count is zero for any H/P assignment.
    let sequence = TurnSequence::from_steps(vec![
        RelativeStep::Start,
        RelativeStep::Straight,
        RelativeStep::Straight,
        RelativeStep::Straight,
        RelativeStep::Straight,
    ]);
    for symbols in ["HHPPH", "HPHPH", "HHHHP", "PHPHP"] {
        let chain = Chain::parse(symbols).unwrap();
        let engine = DirectionalEngine::with_sequence(sequence.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let conformation = engine.generate(&chain, &mut rng).unwrap();

        assert!(conformation.is_complete(5));
        assert_eq!(conformation.trimmed().unwrap().shape(), (1, 5));

        let summary = analyze(&conformation);
        assert_eq!(summary.h_bonds, 0, "straight line bonded for {symbols}");

        // The classified steps recover the committed turns.
        let steps = classify_steps(conformation.placements()).unwrap();
        assert_eq!(
            steps,
            vec![
                RelativeStep::Start,
                RelativeStep::Straight,
                RelativeStep::Straight,
                RelativeStep::Straight,
            ]
        );
    }
}

#[test]
fn sampled_batch_feeds_contact_analysis() {
    let chain = Chain::parse("HHPPHPHH").unwrap();
    let config = SamplerConfig {
        samples: 32,
        workers: Some(2),
        seed: 5,
        backtrack_ceiling: None,
    };
    let sampler = Sampler::new(StochasticEngine::new(), config).unwrap();
    let outcomes = sampler.run(&chain).unwrap();

    assert_eq!(outcomes.len(), 32);
    for outcome in outcomes {
        let SampleOutcome::Sampled(record) = outcome else {
            panic!("stochastic sampling never exhausts");
        };
        assert_eq!(record.contacts.residues, record.conformation.residues_placed());
        // At least the center residue always lands.
        assert!(record.contacts.residues >= 1);
        let ratio = record.contacts.h_ratio().unwrap();
        assert!(ratio >= 0.0);
        assert_eq!(ratio == 0.0, record.contacts.h_bonds == 0);
    }
}
