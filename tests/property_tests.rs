//! Property-based tests using proptest
//!
//! These tests generate random operation sequences and check both queue
//! variants against a naive model: the extreme element is always the model
//! maximum, drains come out sorted, decrease-key never lowers an element's
//! rank, and a whole-queue rebuild after external priority mutation
//! restores exact order.

use proptest::prelude::*;
use reheap::array::ArrayHeap;
use reheap::pairing::PairingForest;
use reheap::PriorityQueue;

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

/// Random push/pop interleavings agree with a naive model at every step
fn check_against_model<H: PriorityQueue<i32> + Default>(
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut queue = H::default();
    let mut model: Vec<i32> = Vec::new();

    for (should_pop, value) in ops {
        if should_pop && !queue.is_empty() {
            let popped = queue.pop();
            let expected = model.iter().copied().max();
            prop_assert_eq!(popped, expected);
            if let Some(p) = popped {
                let at = model.iter().position(|&m| m == p).unwrap();
                model.remove(at);
            }
        } else {
            queue.push(value);
            model.push(value);
        }

        prop_assert_eq!(queue.len(), model.len());
        prop_assert_eq!(queue.peek().copied(), model.iter().copied().max());
    }

    Ok(())
}

/// Draining after arbitrary pushes yields a non-increasing sequence that is
/// a permutation of the input
fn check_drain_sorted<H: PriorityQueue<i32> + Default>(
    values: Vec<i32>,
) -> Result<(), TestCaseError> {
    let mut queue = H::default();
    for &v in &values {
        queue.push(v);
    }

    let mut drained = Vec::new();
    while let Some(v) = queue.pop() {
        drained.push(v);
    }

    let mut expected = values;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    prop_assert_eq!(drained, expected);
    Ok(())
}

fn cell_cmp(a: &Rc<Cell<i32>>, b: &Rc<Cell<i32>>) -> Ordering {
    a.get().cmp(&b.get())
}

proptest! {
    #[test]
    fn array_matches_model(ops in prop::collection::vec((any::<bool>(), -1000..1000i32), 1..200)) {
        check_against_model::<ArrayHeap<i32>>(ops)?;
    }

    #[test]
    fn pairing_matches_model(ops in prop::collection::vec((any::<bool>(), -1000..1000i32), 1..200)) {
        check_against_model::<PairingForest<i32>>(ops)?;
    }

    #[test]
    fn array_drain_sorted(values in prop::collection::vec(-1000..1000i32, 0..200)) {
        check_drain_sorted::<ArrayHeap<i32>>(values)?;
    }

    #[test]
    fn pairing_drain_sorted(values in prop::collection::vec(-1000..1000i32, 0..200)) {
        check_drain_sorted::<PairingForest<i32>>(values)?;
    }

    /// Raising elements through handles keeps the drain sorted and keeps
    /// every raised element at or above its old rank
    #[test]
    fn pairing_update_elt_never_lowers_rank(
        initial in prop::collection::vec(-1000..1000i32, 1..100),
        raises in prop::collection::vec((0usize..100, 1..500i32), 0..50),
    ) {
        let mut queue: PairingForest<i32> = PairingForest::new();
        let mut handles = Vec::new();
        let mut model = initial.clone();

        for &v in &initial {
            handles.push(queue.push_with_handle(v));
        }

        for (index, bump) in raises {
            let index = index % handles.len();
            let current = model[index];
            let raised = current.saturating_add(bump);
            if raised > current {
                queue.update_elt(handles[index], raised).unwrap();
                model[index] = raised;
            }
        }

        let mut drained = Vec::new();
        while let Some(v) = queue.pop() {
            drained.push(v);
        }
        model.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(drained, model);
    }

    /// Mutating every element's priority through shared cells and then
    /// rebuilding restores exact sorted order, for both variants
    #[test]
    fn rebuild_after_external_mutation(
        initial in prop::collection::vec(-1000..1000i32, 1..100),
        replacements in prop::collection::vec(-1000..1000i32, 1..100),
    ) {
        let cells: Vec<Rc<Cell<i32>>> =
            initial.iter().map(|&v| Rc::new(Cell::new(v))).collect();

        let mut array = ArrayHeap::with_comparator(cell_cmp);
        let mut pairing = PairingForest::with_comparator(cell_cmp);
        for cell in &cells {
            array.push(Rc::clone(cell));
            pairing.push(Rc::clone(cell));
        }

        for (cell, &replacement) in cells.iter().zip(replacements.iter().cycle()) {
            cell.set(replacement);
        }
        array.update_priorities();
        pairing.update_priorities();

        let mut expected: Vec<i32> = cells.iter().map(|c| c.get()).collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        let mut from_array = Vec::new();
        while let Some(cell) = array.pop() {
            from_array.push(cell.get());
        }
        let mut from_pairing = Vec::new();
        while let Some(cell) = pairing.pop() {
            from_pairing.push(cell.get());
        }

        prop_assert_eq!(&from_array, &expected);
        prop_assert_eq!(&from_pairing, &expected);
    }
}
