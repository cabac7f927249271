use serde::Serialize;

use crate::disasm::Operation;

/// Stack behaviour of a straight-line run of operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StackProfile {
    /// Items that must already be on the stack for no operation to underflow.
    pub required: usize,
    /// Height change from entry to exit.
    pub net: isize,
    /// Highest point reached, relative to `required` items at entry.
    pub max_height: usize,
    /// Operations whose byte has no registry entry. They count as 0-in/0-out.
    pub unknown: usize,
}

/// Walks `ops` in order, ignoring control flow.
pub fn stack_profile(ops: &[Operation]) -> StackProfile {
    let mut profile = StackProfile::default();
    let mut height: isize = 0;
    let mut peak: isize = 0;
    for op in ops {
        if !op.info.is_known() {
            profile.unknown += 1;
        }
        let need = height - op.info.stack_in as isize;
        if need < 0 {
            profile.required = profile.required.max((-need) as usize);
        }
        height += op.info.stack_delta() as isize;
        peak = peak.max(height);
    }
    profile.net = height;
    profile.max_height = (peak + profile.required as isize) as usize;
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disasm::decode;

    #[test]
    fn balanced_sequence() {
        // PUSH1 1; PUSH1 2; ADD; POP
        let p = stack_profile(&decode(&[0x60, 0x01, 0x60, 0x02, 0x01, 0x50]));
        assert_eq!(p, StackProfile { required: 0, net: 0, max_height: 2, unknown: 0 });
    }

    #[test]
    fn needs_entry_items() {
        // SWAP2; ADD
        let p = stack_profile(&decode(&[0x91, 0x01]));
        assert_eq!(p.required, 3);
        assert_eq!(p.net, -1);
        assert_eq!(p.max_height, 3);
    }

    #[test]
    fn dup_requires_depth() {
        // DUP16 needs sixteen items and leaves seventeen
        let p = stack_profile(&decode(&[0x8f]));
        assert_eq!((p.required, p.net, p.max_height), (16, 1, 17));
    }

    #[test]
    fn unknown_ops_are_counted() {
        let p = stack_profile(&decode(&[0x0c, 0x21, 0x00]));
        assert_eq!(p.unknown, 2);
        assert_eq!(p.net, 0);
    }
}
