//! Shared Tailwind class strings for the light card layout.

pub const PAGE: &str = "min-h-screen bg-neutral-50 flex items-center justify-center p-4";

pub const CARD: &str = "bg-white p-4 rounded-2xl border border-neutral-200 shadow-sm";

pub const RESULT_CARD: &str =
    "bg-white p-5 rounded-2xl border border-neutral-200 shadow-sm flex flex-col gap-1";

pub const SECTION: &str = "bg-white p-6 rounded-2xl border border-neutral-200 shadow-sm";

pub const LABEL: &str = "text-sm font-medium text-neutral-800";

pub const HINT: &str = "mt-1 text-xs text-neutral-400";

pub const INPUT: &str = "mt-2 w-full rounded-xl border border-neutral-300 bg-white px-3 py-2 \
     text-neutral-900 focus:border-neutral-400 focus:outline-none";

pub const BTN_PRIMARY: &str =
    "px-4 py-2 rounded-2xl bg-neutral-900 text-white shadow-sm hover:opacity-90 \
     active:opacity-80 transition";

pub const BTN_SECONDARY: &str =
    "px-4 py-2 rounded-2xl bg-white text-neutral-900 border border-neutral-200 shadow-sm \
     hover:bg-neutral-50 transition";

pub const RESULT_TITLE: &str = "text-sm text-neutral-500";

pub const RESULT_VALUE: &str = "text-3xl font-semibold leading-tight text-neutral-900";

pub const RESULT_SUB: &str = "text-sm text-neutral-400";
