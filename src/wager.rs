/// The bet slot owned by the host. The session reads its count and tells it what to pay.
pub trait WagerHolder {
    /// Opaque item identity; the session never looks inside it.
    type Kind;

    fn has_item(&self) -> bool;

    fn stack_count(&self) -> u32;

    /// Largest stack one slot can hold. Zero means unbounded.
    fn max_stack_size(&self) -> u32;

    /// Empty the slot and hand its contents back to the host.
    fn withdraw_all(&mut self) -> Option<(Self::Kind, u32)>;

    fn set_stack(&mut self, count: u32);

    fn clear_to_empty(&mut self);

    /// Put `count` items of the slot's kind somewhere outside the slot.
    fn deposit_overflow(&mut self, count: u32);
}

/// In-memory bet slot for headless hosts and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSlot<K> {
    item: Option<(K, u32)>,
    max_stack: u32,
    overflow: Vec<(K, u32)>,
}

impl<K: Clone> StackSlot<K> {
    pub fn new(max_stack: u32) -> Self {
        Self {
            item: None,
            max_stack,
            overflow: Vec::new(),
        }
    }

    /// Drop a stack into the slot, returning whatever was there before.
    pub fn place(&mut self, kind: K, count: u32) -> Option<(K, u32)> {
        self.item.replace((kind, count))
    }

    pub fn item(&self) -> Option<&(K, u32)> {
        self.item.as_ref()
    }

    /// Chunks spilled outside the slot, in deposit order.
    pub fn overflow(&self) -> &[(K, u32)] {
        &self.overflow
    }

    pub fn take_overflow(&mut self) -> Vec<(K, u32)> {
        std::mem::take(&mut self.overflow)
    }
}

impl<K: Clone> WagerHolder for StackSlot<K> {
    type Kind = K;

    fn has_item(&self) -> bool {
        self.item.is_some()
    }

    fn stack_count(&self) -> u32 {
        self.item.as_ref().map_or(0, |(_, count)| *count)
    }

    fn max_stack_size(&self) -> u32 {
        self.max_stack
    }

    fn withdraw_all(&mut self) -> Option<(K, u32)> {
        self.item.take()
    }

    fn set_stack(&mut self, count: u32) {
        if count == 0 {
            self.item = None;
            return;
        }
        match self.item.as_mut() {
            Some((_, stack)) => *stack = count,
            None => log::warn!("set_stack({count}) on an empty slot ignored"),
        }
    }

    fn clear_to_empty(&mut self) {
        self.item = None;
    }

    fn deposit_overflow(&mut self, count: u32) {
        match &self.item {
            Some((kind, _)) => self.overflow.push((kind.clone(), count)),
            None => log::warn!("deposit_overflow({count}) with no item kind in slot"),
        }
    }
}
