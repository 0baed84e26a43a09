use heap_report::{report_scratch_allocation, Alloc, LibcAlloc};

/// Exercises the allocator for a fixed number of rounds.
struct Probe {
    rounds: u32,
}

impl Probe {
    pub fn new(rounds: u32) -> Self {
        Probe { rounds }
    }

    pub fn run(&self, sys: &impl Alloc) {
        for _ in 0..self.rounds {
            report_scratch_allocation(sys);
        }
    }
}

fn main() {
    let probe = Probe::new(3);
    probe.run(&LibcAlloc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use heap_report::AllocFakes;

    #[test]
    fn runs_every_round_against_the_seam() {
        // the test target enables the `seams` feature on `heap-report`
        // thus allowing us to use the fakes of the *external* crate
        let sys = AllocFakes::new();
        sys.malloc_fake.when().then_return(0xAABB);

        Probe::new(5).run(&sys);

        assert_eq!(sys.malloc_fake.call_count(), 5);
        assert_eq!(sys.free_fake.history(), vec![(0xAABB,); 5]);
    }
}
