//! seams is a library to fake the system calls a function makes so
//! the function can be unit tested without touching the real system.
//!
//! When code under test calls one of *our* dependencies, a test can
//! substitute the dependency at link time or behind a trait object.
//! System calls are different: the real `malloc`, `free` or `printf`
//! has to stay available to the rest of the binary, so the
//! substitution must happen at a seam owned by the code under test.
//! seams makes that seam a value. The function under test receives a
//! fixture of typed fakes instead of reaching for the system
//! directly; production code passes the real implementation through
//! the same seam.
//!
//! Each [`Fake`] records every invocation (arguments and count) and
//! plays back a programmed answer. The [`fakes!`] macro builds a
//! whole fixture of them out of plain function signatures.
//!
//! # Getting started
//!
//! ```
//! seams::fakes! {
//!     /// Everything `double_level` reaches outside itself for.
//!     pub struct Sys {
//!         fn read_level() -> u32;
//!         fn write_level(level: u32);
//!     }
//! }
//!
//! // the function under test takes its system surface as a parameter
//! fn double_level(sys: &Sys) {
//!     let level = sys.read_level();
//!     sys.write_level(level * 2);
//! }
//!
//! # fn main() {
//! let sys = Sys::new();
//! sys.read_level_fake.when().then_return(21);
//!
//! double_level(&sys);
//!
//! assert_eq!(sys.read_level_fake.call_count(), 1);
//! assert_eq!(sys.write_level_fake.last_args(), Some((42,)));
//! # }
//! ```
//!
//! Unprogrammed fakes answer with the zero value ([`Default`]) of
//! their return type, so void fakes and "don't care" calls need no
//! setup at all.
//!
//! Because the substitution is a plain value in the call graph rather
//! than a renamed symbol, any number of functions under test and
//! fixtures coexist in one binary without colliding.

mod fake;
mod when;

pub use fake::Fake;
pub use when::When;

#[doc(hidden)]
pub use paste::paste as __paste;

/// Generates a fixture struct holding one named [`Fake`] per listed
/// function.
///
/// The input is a struct header followed by the signatures of the
/// functions to fake, written without a receiver. For every
/// `fn name(args...) -> Out;` the fixture gets:
///
/// * a field `name_fake: Fake<(Args,), Out>` holding the recorder,
/// * a method `fn name(&self, args...) -> Out` forwarding to it, so
///   the fixture itself can be handed to the function under test as
///   its system surface.
///
/// Omitting the return type fakes a void function. Every return type
/// must implement [`Default`]: that is what an unprogrammed fake
/// answers with.
///
/// The fixture also gets `new()` (every fake unprogrammed, history
/// empty), a [`Default`] impl, and `reset()`, which resets every fake
/// in one go.
///
/// # Examples
///
/// ```
/// seams::fakes! {
///     /// Seam for the card reader the turnstile polls.
///     pub struct Reader {
///         fn poll() -> u8;
///         fn eject(slot: u8, force: bool);
///     }
/// }
///
/// # fn main() {
/// let reader = Reader::new();
/// reader.poll_fake.when().then_return(3);
///
/// assert_eq!(reader.poll(), 3);
/// reader.eject(1, true);
///
/// assert_eq!(reader.eject_fake.last_args(), Some((1, true)));
///
/// reader.reset();
/// assert_eq!(reader.poll(), 0);
/// # }
/// ```
#[macro_export]
macro_rules! fakes {
    (
        $(#[$meta:meta])*
        $vis:vis struct $fixture:ident {
            $(
                $(#[$fn_meta:meta])*
                fn $name:ident ( $($arg:ident : $arg_ty:ty),* $(,)? ) $(-> $out:ty)?;
            )+
        }
    ) => {
        $crate::__paste! {
            $(#[$meta])*
            $vis struct $fixture {
                $(
                    $vis [<$name _fake>]: $crate::Fake<($($arg_ty,)*), ($($out)?)>,
                )+
            }

            impl $fixture {
                /// Builds the fixture with every fake unprogrammed and
                /// its history empty.
                $vis fn new() -> Self {
                    Self {
                        $([<$name _fake>]: $crate::Fake::named(::core::stringify!($name)),)+
                    }
                }

                /// Resets every fake in the fixture.
                $vis fn reset(&self) {
                    $(self.[<$name _fake>].reset();)+
                }

                $(
                    $(#[$fn_meta])*
                    $vis fn $name(&self, $($arg: $arg_ty),*) $(-> $out)? {
                        self.[<$name _fake>].call(($($arg,)*))
                    }
                )+
            }

            impl ::core::default::Default for $fixture {
                fn default() -> Self {
                    Self::new()
                }
            }
        }
    };
}
