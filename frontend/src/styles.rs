pub const PAGE: &str = "min-h-screen w-full bg-[#fafbfc] flex items-center justify-center p-6 relative overflow-hidden font-sans";
pub const BLOB_TOP: &str = "absolute top-[-10%] left-[-10%] w-[40%] h-[40%] bg-indigo-100 rounded-full blur-[120px] opacity-60 animate-pulse";
pub const BLOB_BOTTOM: &str = "absolute bottom-[-10%] right-[-10%] w-[40%] h-[40%] bg-pink-100 rounded-full blur-[120px] opacity-60 animate-pulse";

pub const CARD: &str = "w-full max-w-md bg-white/40 backdrop-blur-2xl border border-white/50 rounded-[3rem] shadow-2xl p-12 text-center relative z-10";
pub const CARD_WIDE: &str = "w-full max-w-4xl bg-white/40 backdrop-blur-2xl border border-white/50 rounded-[3rem] shadow-2xl flex flex-col md:flex-row overflow-hidden relative z-10";
pub const CARD_ERROR: &str = "mb-6 p-4 bg-red-50 border border-red-200 text-red-600 rounded-2xl text-sm font-medium";
pub const CARD_SUCCESS: &str = "p-3 bg-green-50 border border-green-200 text-green-700 rounded-xl text-sm font-medium text-center";

pub const ICON_WRAPPER_INDIGO: &str = "w-16 h-16 bg-indigo-100 rounded-2xl flex items-center justify-center mx-auto mb-6 text-indigo-600 text-2xl";
pub const ICON_WRAPPER_GREEN: &str = "w-16 h-16 bg-green-100 rounded-2xl flex items-center justify-center mx-auto mb-6 text-green-600 text-2xl";
pub const ICON_WRAPPER_RED: &str = "w-16 h-16 bg-red-100 rounded-2xl flex items-center justify-center mx-auto mb-6 text-red-600 text-2xl";

pub const TEXT_H2: &str = "text-2xl font-black text-slate-900 tracking-tight mb-4";
pub const TEXT_H2_FORM: &str = "text-3xl font-black text-slate-900 tracking-tight mb-2";
pub const TEXT_BODY: &str = "text-slate-600 text-sm font-medium";
pub const TEXT_ERROR: &str = "text-red-600 text-sm font-medium mb-8";
pub const TEXT_HINT: &str = "text-slate-400 text-xs font-medium mb-8";
pub const TEXT_EMAIL: &str = "text-indigo-600 font-bold";
pub const TEXT_LABEL: &str = "text-[10px] font-black uppercase tracking-widest text-slate-400 ml-1";

pub const FORM: &str = "space-y-6";
pub const INPUT: &str = "w-full pl-4 pr-12 py-4 bg-slate-50 border border-slate-100 rounded-2xl outline-none focus:ring-4 focus:ring-indigo-50 focus:border-indigo-600 transition-all font-bold text-slate-800";
pub const INPUT_TOGGLE: &str = "absolute right-4 top-1/2 -translate-y-1/2 text-slate-300 hover:text-indigo-600 transition-colors text-xs font-bold uppercase";

pub const BUTTON_PRIMARY: &str = "w-full bg-indigo-600 text-white py-5 rounded-[2rem] font-black text-sm uppercase tracking-widest shadow-xl shadow-indigo-600/20 hover:bg-indigo-700 hover:-translate-y-1 active:translate-y-0 transition-all flex items-center justify-center gap-3 disabled:opacity-50";
pub const BUTTON_SEND: &str = "w-full bg-green-600 hover:bg-green-700 text-white py-4 rounded-[2rem] font-black text-sm uppercase tracking-widest shadow-xl shadow-green-600/20 hover:-translate-y-1 transition-all flex items-center justify-center gap-3 disabled:opacity-50";
pub const BUTTON_LINK: &str = "inline-flex items-center gap-2 px-8 py-4 bg-indigo-600 text-white rounded-[2rem] font-black text-sm uppercase tracking-widest shadow-xl shadow-indigo-600/20 hover:bg-indigo-700 hover:-translate-y-1 transition-all";
pub const BUTTON_MUTED: &str = "inline-flex items-center gap-2 px-8 py-4 bg-slate-100 hover:bg-slate-200 text-slate-600 rounded-[2rem] font-black text-sm uppercase tracking-widest transition-all";
pub const LINK: &str = "inline-flex items-center gap-2 text-slate-400 hover:text-indigo-600 font-medium text-sm transition-colors";
pub const LINK_SMALL: &str = "text-xs text-indigo-600 hover:text-indigo-500 font-medium hover:underline underline-offset-2";

pub const SPINNER: &str = "w-4 h-4 border-2 border-white border-t-transparent rounded-full animate-spin";

pub const CAROUSEL: &str = "relative group";
pub const CAROUSEL_IMAGE: &str = "w-full h-auto object-cover";
pub const CAROUSEL_PREV: &str = "absolute left-2 top-1/2 -translate-y-1/2 p-2 bg-black/50 backdrop-blur-sm text-white rounded-full opacity-0 group-hover:opacity-100 transition-opacity hover:bg-black/70";
pub const CAROUSEL_NEXT: &str = "absolute right-2 top-1/2 -translate-y-1/2 p-2 bg-black/50 backdrop-blur-sm text-white rounded-full opacity-0 group-hover:opacity-100 transition-opacity hover:bg-black/70";
pub const CAROUSEL_DOTS: &str = "absolute bottom-3 left-1/2 -translate-x-1/2 flex gap-1.5";
pub const CAROUSEL_DOT: &str = "w-2 h-2 rounded-full transition-all bg-white/50 hover:bg-white/75";
pub const CAROUSEL_DOT_ACTIVE: &str = "h-2 rounded-full transition-all bg-white w-6";
pub const CAROUSEL_COUNTER: &str = "absolute top-3 right-3 px-2 py-1 bg-black/50 backdrop-blur-sm text-white text-xs font-bold rounded-full";
