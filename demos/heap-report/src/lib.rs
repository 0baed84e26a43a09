use std::mem;

/// The system calls [`report_scratch_allocation`] reaches. Production
/// hands it [`LibcAlloc`]; tests hand it a fixture of fakes.
///
/// Addresses cross the seam as plain `usize` values, with 0 standing
/// for null, so that fixtures stay thread-safe and unprogrammed
/// allocation fakes answer null on their own.
pub trait Alloc {
    /// Grabs `len` bytes from the allocator, returning their address
    /// or 0 when the allocator refuses.
    fn malloc(&self, len: usize) -> usize;

    /// Returns an allocation to the allocator.
    fn free(&self, addr: usize);

    /// Reports an allocation's address to whoever is watching.
    fn report(&self, addr: usize);
}

/// The real system allocator behind the [`Alloc`] seam.
pub struct LibcAlloc;

impl Alloc for LibcAlloc {
    fn malloc(&self, len: usize) -> usize {
        unsafe { libc::malloc(len) as usize }
    }

    fn free(&self, addr: usize) {
        unsafe { libc::free(addr as *mut libc::c_void) }
    }

    fn report(&self, addr: usize) {
        println!("scratch buffer at {:#x}", addr);
    }
}

/// Takes an `i32`-sized scratch buffer from the allocator, reports
/// where it lives and hands it straight back.
pub fn report_scratch_allocation(sys: &impl Alloc) {
    let addr = sys.malloc(mem::size_of::<i32>());
    sys.report(addr);
    sys.free(addr);
}

// Fakes are available both for our tests and for consumers that turn
// the `seams` feature on for theirs.
#[cfg(any(test, feature = "seams"))]
seams::fakes! {
    /// One fake per [`Alloc`] method.
    pub struct AllocFakes {
        fn malloc(len: usize) -> usize;
        fn free(addr: usize);
        fn report(addr: usize);
    }
}

#[cfg(any(test, feature = "seams"))]
impl Alloc for AllocFakes {
    fn malloc(&self, len: usize) -> usize {
        self.malloc_fake.call((len,))
    }

    fn free(&self, addr: usize) {
        self.free_fake.call((addr,))
    }

    fn report(&self, addr: usize) {
        self.report_fake.call((addr,))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRATCH: usize = 0xAABB;

    #[test]
    fn asks_for_room_for_one_i32() {
        let sys = AllocFakes::new();

        report_scratch_allocation(&sys);

        assert_eq!(sys.malloc_fake.call_count(), 1);
        assert_eq!(sys.malloc_fake.last_args(), Some((mem::size_of::<i32>(),)));
    }

    #[test]
    fn frees_the_address_it_allocated() {
        let sys = AllocFakes::new();
        sys.malloc_fake.when().then_return(SCRATCH);

        report_scratch_allocation(&sys);

        assert_eq!(sys.free_fake.last_args(), Some((SCRATCH,)));
    }

    #[test]
    fn reports_the_address_it_allocated() {
        let sys = AllocFakes::new();
        sys.malloc_fake.when().then_return(SCRATCH);

        report_scratch_allocation(&sys);

        assert_eq!(sys.report_fake.last_args(), Some((SCRATCH,)));
    }
}
