//! Shared class strings so pages keep one look.

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary() -> &'static str {
    "w-full py-5 bg-indigo-600 text-white rounded-[2rem] font-black text-lg hover:bg-indigo-700 transition shadow-xl shadow-indigo-100 disabled:opacity-50 disabled:cursor-not-allowed"
}

pub fn btn_secondary() -> &'static str {
    "flex-1 py-5 border-2 border-gray-100 rounded-2xl font-black text-gray-600 hover:bg-gray-50 transition"
}

pub fn btn_dark() -> &'static str {
    "inline-block px-12 py-5 bg-gray-900 text-white font-black rounded-3xl hover:scale-105 transition shadow-2xl uppercase tracking-widest text-xs"
}

pub fn btn_link() -> &'static str {
    "text-indigo-600 text-xs font-black uppercase tracking-widest flex items-center mt-2"
}

// ============================================
// SELECTABLE OPTIONS
// ============================================

/// Large option tile (brand, model, condition).
pub fn option_card(selected: bool) -> &'static str {
    if selected {
        "flex items-center p-6 rounded-3xl border-2 text-left transition-all border-indigo-600 bg-indigo-50 shadow-md"
    } else {
        "flex items-center p-6 rounded-3xl border-2 text-left transition-all border-gray-100 bg-white hover:border-gray-200"
    }
}

pub fn option_title(selected: bool) -> &'static str {
    if selected {
        "block font-black text-lg text-indigo-700"
    } else {
        "block font-black text-lg text-gray-800"
    }
}

/// Small pill for storage/age/payment choices.
pub fn chip(selected: bool) -> &'static str {
    if selected {
        "py-4 px-5 rounded-2xl border-2 font-black text-sm transition border-indigo-600 bg-indigo-50 text-indigo-700"
    } else {
        "py-4 px-5 rounded-2xl border-2 font-black text-sm transition border-gray-100 text-gray-500 bg-white hover:bg-gray-50"
    }
}

pub fn filter_pill(active: bool) -> &'static str {
    if active {
        "px-8 py-3 rounded-2xl font-black transition whitespace-nowrap text-sm tracking-tight bg-indigo-600 text-white shadow-2xl shadow-indigo-100"
    } else {
        "px-8 py-3 rounded-2xl font-black transition whitespace-nowrap text-sm tracking-tight bg-white text-gray-600 border-2 border-gray-50 hover:border-gray-200"
    }
}

/// Pass/fail tile for a functional check.
pub fn check_card(passing: bool) -> &'static str {
    if passing {
        "flex items-center justify-between p-6 rounded-3xl border-2 transition-all border-green-100 bg-green-50"
    } else {
        "flex items-center justify-between p-6 rounded-3xl border-2 transition-all border-red-100 bg-red-50"
    }
}

pub fn check_badge(passing: bool) -> &'static str {
    if passing {
        "px-3 py-1.5 rounded-xl text-[10px] font-black uppercase tracking-widest bg-green-600 text-white"
    } else {
        "px-3 py-1.5 rounded-xl text-[10px] font-black uppercase tracking-widest bg-red-600 text-white"
    }
}

// ============================================
// PANEL / TEXT STYLES
// ============================================

pub fn panel() -> &'static str {
    "bg-white p-8 rounded-3xl border border-gray-100 shadow-sm"
}

pub fn label_class() -> &'static str {
    "block text-xs font-black text-gray-400 mb-4 uppercase tracking-[0.2em]"
}

pub fn section_title() -> &'static str {
    "font-black text-gray-800 mb-4 uppercase text-xs tracking-widest"
}

pub fn input_class() -> &'static str {
    "w-full p-6 bg-white text-gray-900 border-2 border-gray-100 rounded-3xl focus:border-indigo-600 outline-none transition font-bold shadow-sm"
}

pub fn nav_link(active: bool) -> &'static str {
    if active {
        "text-sm font-bold uppercase tracking-widest transition text-indigo-600 border-b-2 border-indigo-600 pb-1"
    } else {
        "text-sm font-bold uppercase tracking-widest transition text-gray-500 hover:text-indigo-600"
    }
}
