use eyre::Result;
use polisher_alignment_rs::diagnostics::Noop;
use polisher_alignment_rs::incremental::Engine;
use polisher_alignment_rs::pairwise::scoring::{ScoringMatrix, Table, Token};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod common;

use common::*;

fn rows(matrix: &polisher_alignment_rs::pairwise::matrix::ScoreMatrix<f64>) -> Vec<Vec<f64>> {
    matrix.iter_rows().map(|x| x.to_vec()).collect()
}

fn check_matrices<M>(scoring: &M, seed: u64) -> Result<()>
where
    M: ScoringMatrix<Score = f64, Symbol = u8>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut engine = Engine::new(1);
    for _ in 0..50 {
        let candidate = random_sequence(&mut rng, 0, 12);
        let read = random_sequence(&mut rng, 0, 12);

        let score = engine.global_alignment(&candidate, &read, scoring, 0)?;
        assert_eq!(score, reference_score(&candidate, &read, scoring)?);
        assert_eq!(score, engine.forward(0)?.last());
        let expected = reference(&candidate, &read, scoring)?;
        assert_eq!(rows(engine.forward(0)?), expected);

        let (mut rcandidate, mut rread) = (candidate.clone(), read.clone());
        rcandidate.reverse();
        rread.reverse();
        let expected = reference(&rcandidate, &rread, scoring)?;
        assert_eq!(rows(engine.reverse(0)?), expected);
    }
    Ok(())
}

#[test]
fn forward_and_reverse_matrices() -> Result<()> {
    check_matrices(&uniform(), 1)?;
    check_matrices(&table()?, 2)
}

fn check_edits<M>(scoring: &M, seed: u64) -> Result<()>
where
    M: ScoringMatrix<Score = f64, Symbol = u8>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut engine = Engine::new(3);
    for _ in 0..25 {
        let candidate = random_sequence(&mut rng, 1, 10);
        let reads = [
            mutate(&mut rng, &candidate, 2),
            random_sequence(&mut rng, 0, 10),
            Vec::new(),
        ];
        for (index, read) in reads.iter().enumerate() {
            engine.global_alignment(&candidate, read, scoring, index)?;
        }

        for (index, read) in reads.iter().enumerate() {
            for position in 1..=candidate.len() {
                let expected = reference_score(&deleted(&candidate, position), read, scoring)?;
                assert_eq!(engine.add_deletion(index, position)?, expected);

                for &symbol in ALPHABET {
                    let edited = substituted(&candidate, position, symbol);
                    let expected = reference_score(&edited, read, scoring)?;
                    assert_eq!(
                        engine.add_substitution(index, position, symbol, read, scoring)?,
                        expected
                    );
                }
            }

            for position in 1..=candidate.len() + 1 {
                for &symbol in ALPHABET {
                    let edited = inserted(&candidate, position, symbol);
                    let expected = reference_score(&edited, read, scoring)?;
                    assert_eq!(
                        engine.add_insertion(index, position, symbol, read, scoring)?,
                        expected
                    );
                }
            }
        }
    }
    Ok(())
}

#[test]
fn edits_match_fresh_alignment() -> Result<()> {
    check_edits(&uniform(), 3)?;
    check_edits(&table()?, 4)
}

#[test]
fn example_pair() -> Result<()> {
    let scoring = uniform();
    let mut engine = Engine::new(1);
    assert_eq!(engine.global_alignment(b"ACGT", b"AGT", &scoring, 0)?, 2.0);
    assert_eq!(engine.add_deletion(0, 2)?, 3.0);
    assert_eq!(engine.add_deletion(0, 1)?, 1.0);
    Ok(())
}

#[test]
fn self_alignment_edits_score_lower() -> Result<()> {
    let scoring = uniform();
    let mut rng = StdRng::seed_from_u64(5);
    let mut engine = Engine::new(1);

    for _ in 0..20 {
        let sequence = random_sequence(&mut rng, 1, 15);
        let score = engine.global_alignment(&sequence, &sequence, &scoring, 0)?;
        assert_eq!(score, sequence.len() as f64);

        for position in 1..=sequence.len() {
            assert!(engine.add_deletion(0, position)? < score);
            let current = sequence[position - 1];
            for &symbol in ALPHABET.iter().filter(|x| **x != current) {
                let edited = engine.add_substitution(0, position, symbol, &sequence, &scoring)?;
                assert!(edited < score);
            }
            // Substituting a symbol with itself changes nothing
            let same = engine.add_substitution(0, position, current, &sequence, &scoring)?;
            assert_eq!(same, score);
        }
    }
    Ok(())
}

#[test]
fn clean_releases_slots() -> Result<()> {
    let scoring = uniform();
    let mut engine = Engine::new(2);
    engine.global_alignment(b"ACGT", b"AGT", &scoring, 0)?;
    engine.global_alignment(b"ACGT", b"ACGT", &scoring, 1)?;

    engine.clean();
    assert_eq!(engine.len(), 0);
    assert!(engine.add_deletion(0, 1).is_err());
    assert!(engine.add_insertion(1, 1, b'A', b"ACGT", &scoring).is_err());

    // The next round reuses the same engine
    engine.resize(1);
    assert_eq!(engine.global_alignment(b"AGT", b"AGT", &scoring, 0)?, 3.0);
    Ok(())
}

#[test]
fn lookup_errors_propagate() -> Result<()> {
    let scoring: Table<f64> = TABLE.parse()?;
    assert!(scoring.score(Token::Symbol(b'N'), Token::Gap).is_err());

    let mut engine = Engine::new(1);
    engine.global_alignment(b"ACGT", b"AGT", &scoring, 0)?;

    let err = engine
        .global_alignment(b"ACGT", b"ANT", &scoring, 0)
        .unwrap_err();
    assert!(err.to_string().contains("'N'"));
    // The previous alignment survives the failure
    let previous = reference_score(b"ACGT", b"AGT", &scoring)?;
    assert_eq!(engine.forward(0)?.last(), previous);

    let substituted = engine.add_substitution(0, 1, b'N', b"AGT", &scoring);
    assert!(substituted.is_err());
    assert!(engine.add_insertion(0, 1, b'N', b"AGT", &scoring).is_err());
    Ok(())
}

#[test]
fn gap_symbol_is_not_a_sequence_symbol() -> Result<()> {
    let scoring = table()?;
    let mut engine = Engine::new(1);

    let err = engine
        .global_alignment(b"ACGT", b"A-GT", &scoring, 0)
        .unwrap_err();
    assert!(err.to_string().contains("'-'"));
    let gapped = engine.global_alignment(b"AC-T", b"AGT", &scoring, 0);
    assert!(gapped.is_err());
    assert!(engine.slot(0).is_err());

    engine.global_alignment(b"ACGT", b"AGT", &scoring, 0)?;
    assert!(engine.add_insertion(0, 2, b'-', b"AGT", &scoring).is_err());
    Ok(())
}

#[test]
fn align_all_is_deterministic() -> Result<()> {
    let scoring = table()?;
    let mut rng = StdRng::seed_from_u64(6);
    let candidate = random_sequence(&mut rng, 20, 30);
    let reads = (0..32)
        .map(|_| mutate(&mut rng, &candidate, 3))
        .collect::<Vec<_>>();

    let mut parallel = Engine::new(0);
    let mut sequential = Engine::new(0).with_sink(Noop);
    let scores = parallel.align_all(&candidate, &reads, &scoring)?;
    assert_eq!(scores, sequential.align_all(&candidate, &reads, &scoring)?);

    for (index, read) in reads.iter().enumerate() {
        assert_eq!(scores[index], reference_score(&candidate, read, &scoring)?);
        assert_eq!(parallel.slot(index)?, sequential.slot(index)?);
    }

    // A failing read aborts the batch
    let mut broken = reads.clone();
    broken[7].push(b'N');
    assert!(parallel.align_all(&candidate, &broken, &scoring).is_err());
    Ok(())
}
