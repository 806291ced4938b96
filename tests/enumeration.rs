use ahash::HashSet;
use anyhow::Result;
use casegen::{
    BidirectionalGenerator, CartesianProduct, Case, Combination, Cursor, ForwardGenerator,
    Generator, Permutation, RepeatedCombination, RepeatedPermutation, StepBack, Unrank,
};

fn assert_covers_exactly_once<G: ForwardGenerator>(family: &G) {
    let cases: Vec<Case> = family.cases().collect();
    assert_eq!(cases.len(), family.size());

    let distinct: HashSet<Case> = cases.iter().cloned().collect();
    assert_eq!(distinct.len(), family.size());

    // A second traversal restarts from the first case.
    assert_eq!(family.cases().collect::<Vec<_>>(), cases);
}

#[test]
fn every_family_covers_its_cases_exactly_once() -> Result<()> {
    assert_covers_exactly_once(&CartesianProduct::new(vec![1, 3, 2, 4])?);
    assert_covers_exactly_once(&CartesianProduct::new(vec![5])?);
    assert_covers_exactly_once(&Permutation::new(6, 3)?);
    assert_covers_exactly_once(&Permutation::factorial(5)?);
    assert_covers_exactly_once(&RepeatedPermutation::new(3, 4)?);
    assert_covers_exactly_once(&Combination::new(7, 3)?);
    assert_covers_exactly_once(&Combination::new(6, 6)?);
    assert_covers_exactly_once(&RepeatedCombination::new(4, 3)?);
    assert_covers_exactly_once(&RepeatedCombination::new(2, 5)?);
    Ok(())
}

#[test]
fn random_access_agrees_with_traversal() -> Result<()> {
    let product = CartesianProduct::new(vec![3, 2, 3])?;
    let permutation = Permutation::new(5, 3)?;
    let repeated = RepeatedPermutation::new(4, 3)?;

    for (rank, case) in product.cases().enumerate() {
        assert_eq!(product.at(rank)?, case);
    }
    for (rank, case) in permutation.cases().enumerate() {
        assert_eq!(permutation.at(rank)?, case);
    }
    for (rank, case) in repeated.cases().enumerate() {
        assert_eq!(repeated.at(rank)?, case);
    }
    Ok(())
}

#[test]
fn reverse_traversal_mirrors_forward_traversal() -> Result<()> {
    let product = CartesianProduct::new(vec![2, 3, 2])?;
    let permutation = Permutation::new(5, 2)?;
    let repeated = RepeatedPermutation::new(3, 3)?;
    let combination = Combination::new(6, 2)?;

    let mut mirrored: Vec<Case> = product.cases().collect();
    mirrored.reverse();
    assert_eq!(product.rcases().collect::<Vec<_>>(), mirrored);

    let mut mirrored: Vec<Case> = permutation.cases().collect();
    mirrored.reverse();
    assert_eq!(permutation.rcases().collect::<Vec<_>>(), mirrored);

    let mut mirrored: Vec<Case> = repeated.cases().collect();
    mirrored.reverse();
    assert_eq!(repeated.rcases().collect::<Vec<_>>(), mirrored);

    let mut mirrored: Vec<Case> = combination.cases().collect();
    mirrored.reverse();
    assert_eq!(combination.rcases().collect::<Vec<_>>(), mirrored);
    assert_eq!(combination.cases().rev().collect::<Vec<_>>(), mirrored);
    Ok(())
}

#[test]
fn the_last_case_sits_one_step_before_end() -> Result<()> {
    let permutation = Permutation::new(4, 2)?;
    let last = permutation.cases().last().unwrap();
    assert_eq!(permutation.end().retreat().value(), Ok(last.clone()));
    assert_eq!(permutation.rbegin().value(), Ok(last));

    let combination = Combination::new(5, 3)?;
    let last = combination.cases().last().unwrap();
    assert_eq!(combination.end().retreat().value(), Ok(last));
    Ok(())
}

#[test]
fn combination_cases_are_strictly_increasing_subsets() -> Result<()> {
    let combination = Combination::new(7, 4)?;
    for case in &combination {
        assert_eq!(case.len(), 4);
        assert!(case.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(case.iter().all(|&atom| atom < 7));
    }
    Ok(())
}

#[test]
fn repeated_combination_cases_are_weakly_increasing() -> Result<()> {
    let combination = RepeatedCombination::new(5, 3)?;
    for case in &combination {
        assert_eq!(case.len(), 3);
        assert!(case.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(case.iter().all(|&atom| atom < 5));
    }
    Ok(())
}

#[test]
fn permutation_cases_never_repeat_an_atom() -> Result<()> {
    let permutation = Permutation::new(6, 4)?;
    for case in &permutation {
        let distinct: HashSet<usize> = case.iter().copied().collect();
        assert_eq!(distinct.len(), case.len());
    }
    Ok(())
}

#[test]
fn generators_round_trip_through_serde() -> Result<()> {
    let product = CartesianProduct::new(vec![2, 5, 3])?;
    let serialized = serde_json::to_string(&product)?;
    assert_eq!(serialized, "[2,5,3]");
    assert_eq!(serde_json::from_str::<CartesianProduct>(&serialized)?, product);

    let permutation = Permutation::new(6, 3)?;
    let serialized = serde_json::to_string(&permutation)?;
    assert_eq!(serde_json::from_str::<Permutation>(&serialized)?, permutation);

    let repeated = RepeatedPermutation::new(4, 2)?;
    let serialized = serde_json::to_string(&repeated)?;
    assert_eq!(
        serde_json::from_str::<RepeatedPermutation>(&serialized)?,
        repeated
    );

    let combination = Combination::new(9, 4)?;
    let serialized = serde_json::to_string(&combination)?;
    assert_eq!(serde_json::from_str::<Combination>(&serialized)?, combination);

    let multiset = RepeatedCombination::new(3, 6)?;
    let serialized = serde_json::to_string(&multiset)?;
    assert_eq!(
        serde_json::from_str::<RepeatedCombination>(&serialized)?,
        multiset
    );
    Ok(())
}

#[test]
fn deserializing_a_bad_shape_fails() {
    assert!(serde_json::from_str::<Permutation>(r#"{"n":0,"r":2}"#).is_err());
    assert!(serde_json::from_str::<Combination>(r#"{"n":3,"r":5}"#).is_err());
    assert!(serde_json::from_str::<CartesianProduct>("[2,0,3]").is_err());
}

#[test]
fn equal_shapes_make_equal_generators() -> Result<()> {
    assert_eq!(Permutation::new(5, 3)?, Permutation::new(5, 3)?);
    assert_ne!(Permutation::new(5, 3)?, Permutation::new(5, 2)?);
    assert_eq!(
        CartesianProduct::new(vec![2, 3])?,
        CartesianProduct::new(vec![2, 3])?
    );
    assert_ne!(
        CartesianProduct::new(vec![2, 3])?,
        CartesianProduct::new(vec![3, 2])?
    );
    Ok(())
}

#[cfg(feature = "sampling")]
#[test]
fn sampling_draws_cases_from_the_family() -> Result<()> {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    let mut rng = ChaCha8Rng::seed_from_u64(17);

    let permutation = Permutation::new(7, 3)?;
    let all: HashSet<Case> = permutation.cases().collect();
    for _ in 0..50 {
        assert!(all.contains(&permutation.sample(&mut rng)));
    }

    let product = CartesianProduct::new(vec![4, 2, 5])?;
    let all: HashSet<Case> = product.cases().collect();
    for _ in 0..50 {
        assert!(all.contains(&product.sample(&mut rng)));
    }
    Ok(())
}
