/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Builds the ordered value list for a method call. Order must match the
// descriptor's argument-name list, so call sites read as the wire order.
macro_rules! args {
    ($($v:expr),* $(,)?) => {
        vec![$(crate::v1_2::method::ArgValue::to_arg(&$v)),*]
    };
}

pub(crate) use args;
