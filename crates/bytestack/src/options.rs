use alloc::{boxed::Box, rc::Rc};
use core::{cell::Cell, num::NonZeroUsize};

/// Default capacity of a freshly created stack, in bytes.
const DEFAULT_INITIAL_STACK_SIZE: NonZeroUsize = NonZeroUsize::new(64).unwrap();

/// Default capacity increment per growth event, in bytes.
const DEFAULT_STACK_EXPANSION_STEP_SIZE: NonZeroUsize = NonZeroUsize::new(64).unwrap();

/// Supplies the growth parameters of a [`ByteStack`](crate::ByteStack).
///
/// `initial_stack_size` is read once, when the stack is created.
/// `stack_expansion_step_size` is read again on every growth event, so an
/// implementation backed by interior mutability can change it between calls.
pub trait StackConfig {
    /// Capacity of the backing store at creation.
    fn initial_stack_size(&self) -> NonZeroUsize;

    /// Capacity added by a single growth event.
    fn stack_expansion_step_size(&self) -> NonZeroUsize;
}

impl<T: StackConfig + ?Sized> StackConfig for &T {
    #[inline]
    fn initial_stack_size(&self) -> NonZeroUsize {
        (**self).initial_stack_size()
    }

    #[inline]
    fn stack_expansion_step_size(&self) -> NonZeroUsize {
        (**self).stack_expansion_step_size()
    }
}

impl<T: StackConfig + ?Sized> StackConfig for Rc<T> {
    #[inline]
    fn initial_stack_size(&self) -> NonZeroUsize {
        (**self).initial_stack_size()
    }

    #[inline]
    fn stack_expansion_step_size(&self) -> NonZeroUsize {
        (**self).stack_expansion_step_size()
    }
}

impl<T: StackConfig + ?Sized> StackConfig for Box<T> {
    #[inline]
    fn initial_stack_size(&self) -> NonZeroUsize {
        (**self).initial_stack_size()
    }

    #[inline]
    fn stack_expansion_step_size(&self) -> NonZeroUsize {
        (**self).stack_expansion_step_size()
    }
}

/// Fixed growth parameters for a [`ByteStack`](crate::ByteStack).
///
/// # Examples
///
/// ```rust
/// use core::num::NonZeroUsize;
/// use bytestack::{ByteStack, StackOptions};
///
/// let options = StackOptions {
///     initial_stack_size: NonZeroUsize::new(16).unwrap(),
///     ..Default::default()
/// };
/// let stack = ByteStack::new(options);
/// assert_eq!(stack.capacity(), 16);
/// ```
///
/// # Default
///
/// Both sizes default to 64 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackOptions {
    /// Capacity of the backing store at creation.
    ///
    /// # Default
    ///
    /// `64`
    pub initial_stack_size: NonZeroUsize,

    /// Capacity added each time a push runs out of room.
    ///
    /// The step may be smaller than a single push; the stack then grows
    /// several times within that push.
    ///
    /// # Default
    ///
    /// `64`
    pub stack_expansion_step_size: NonZeroUsize,
}

impl StackOptions {
    /// Builds options from plain sizes.
    ///
    /// # Panics
    ///
    /// Panics if either size is zero.
    #[must_use]
    pub fn new(initial_stack_size: usize, stack_expansion_step_size: usize) -> Self {
        Self {
            initial_stack_size: NonZeroUsize::new(initial_stack_size)
                .unwrap_or_else(|| panic!("initial_stack_size must be positive")),
            stack_expansion_step_size: NonZeroUsize::new(stack_expansion_step_size)
                .unwrap_or_else(|| panic!("stack_expansion_step_size must be positive")),
        }
    }
}

impl Default for StackOptions {
    fn default() -> Self {
        Self {
            initial_stack_size: DEFAULT_INITIAL_STACK_SIZE,
            stack_expansion_step_size: DEFAULT_STACK_EXPANSION_STEP_SIZE,
        }
    }
}

impl StackConfig for StackOptions {
    #[inline]
    fn initial_stack_size(&self) -> NonZeroUsize {
        self.initial_stack_size
    }

    #[inline]
    fn stack_expansion_step_size(&self) -> NonZeroUsize {
        self.stack_expansion_step_size
    }
}

/// Growth parameters that can be changed while a stack is live.
///
/// Share it with the stack through an [`Rc`] and adjust the step size between
/// calls; the next growth event picks up the new value.
///
/// ```rust
/// use std::rc::Rc;
/// use core::num::NonZeroUsize;
/// use bytestack::{ByteStack, ReloadableOptions, StackOptions};
///
/// let options = Rc::new(ReloadableOptions::new(StackOptions::new(2, 2)));
/// let mut stack = ByteStack::new(Rc::clone(&options));
/// stack.push(b"abc");
/// assert_eq!(stack.capacity(), 4);
///
/// options.set_stack_expansion_step_size(NonZeroUsize::new(10).unwrap());
/// stack.push(b"de");
/// assert_eq!(stack.capacity(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadableOptions {
    initial_stack_size: Cell<NonZeroUsize>,
    stack_expansion_step_size: Cell<NonZeroUsize>,
}

impl ReloadableOptions {
    /// Starts from a fixed set of options.
    #[must_use]
    pub fn new(options: StackOptions) -> Self {
        Self {
            initial_stack_size: Cell::new(options.initial_stack_size),
            stack_expansion_step_size: Cell::new(options.stack_expansion_step_size),
        }
    }

    /// Changes the capacity used by stacks created after this call.
    pub fn set_initial_stack_size(&self, size: NonZeroUsize) {
        self.initial_stack_size.set(size);
    }

    /// Changes the increment used by the next growth event.
    pub fn set_stack_expansion_step_size(&self, size: NonZeroUsize) {
        self.stack_expansion_step_size.set(size);
    }

    /// Current values as plain options.
    #[must_use]
    pub fn snapshot(&self) -> StackOptions {
        StackOptions {
            initial_stack_size: self.initial_stack_size.get(),
            stack_expansion_step_size: self.stack_expansion_step_size.get(),
        }
    }
}

impl Default for ReloadableOptions {
    fn default() -> Self {
        Self::new(StackOptions::default())
    }
}

impl From<StackOptions> for ReloadableOptions {
    fn from(options: StackOptions) -> Self {
        Self::new(options)
    }
}

impl StackConfig for ReloadableOptions {
    #[inline]
    fn initial_stack_size(&self) -> NonZeroUsize {
        self.initial_stack_size.get()
    }

    #[inline]
    fn stack_expansion_step_size(&self) -> NonZeroUsize {
        self.stack_expansion_step_size.get()
    }
}
