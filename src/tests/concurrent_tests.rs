#[cfg(test)]
mod tests {
    use crate::tests::test_utils::assert_unique_and_monotonic;
    use crate::*;
    use std::collections::HashSet;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_concurrent_generation_one_worker() {
        let worker = IdGenerator::default().bind(1).unwrap();
        let num_threads = 8;
        let ids_per_thread = 500;
        let mut handles = Vec::with_capacity(num_threads);

        for _ in 0..num_threads {
            let worker = worker.clone();
            handles.push(thread::spawn(move || {
                (0..ids_per_thread)
                    .map(|_| worker.next_id())
                    .collect::<Vec<_>>()
            }));
        }

        let mut all_ids = Vec::with_capacity(num_threads * ids_per_thread);
        for handle in handles {
            all_ids.extend(handle.join().expect("thread panicked"));
        }

        assert_unique_and_monotonic(all_ids, num_threads * ids_per_thread);
    }

    #[test]
    fn test_each_thread_sees_increasing_ids() {
        let worker = Arc::new(IdGenerator::default().bind(3).unwrap());
        let barrier = Arc::new(Barrier::new(4));
        let mut handles = Vec::new();

        for _ in 0..4 {
            let worker = Arc::clone(&worker);
            let barrier = Arc::clone(&barrier);
            handles.push(thread::spawn(move || {
                barrier.wait();
                let ids: Vec<i64> = (0..2_000).map(|_| worker.next_id()).collect();
                assert!(ids.windows(2).all(|w| w[1] > w[0]));
                ids
            }));
        }

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(all.insert(id), "Duplicate ID generated: {id}");
            }
        }
        assert_eq!(all.len(), 8_000);
    }

    #[test]
    fn test_workers_sharing_generator_never_collide() {
        let generator = IdGenerator::default();
        let mut handles = Vec::new();

        for worker_id in 1..=4 {
            let worker = generator.bind(worker_id).unwrap();
            handles.push(thread::spawn(move || {
                (0..1_000).map(|_| worker.next_id()).collect::<Vec<_>>()
            }));
        }

        let all_ids: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_unique_and_monotonic(all_ids, 4_000);
    }

    #[test]
    fn test_distinct_generators_with_distinct_workers() {
        // Separate processes: separate state, uniqueness comes from the worker id
        let mut handles = Vec::new();
        for worker_id in [1, 2] {
            handles.push(thread::spawn(move || {
                let worker = IdGenerator::default().bind(worker_id).unwrap();
                (0..2_000).map(|_| worker.next_id()).collect::<Vec<_>>()
            }));
        }

        let mut all = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(all.insert(id), "Collision across workers: {id}");
            }
        }
        assert_eq!(all.len(), 4_000);
    }
}
