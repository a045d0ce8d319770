pub const CONTAINER: &str = "min-h-screen w-full flex flex-col items-center justify-center px-4 py-8";
pub const CARD: &str = "bg-white/10 backdrop-blur-md rounded-2xl shadow-xl p-6 sm:p-8 max-w-xl w-full border border-white/20";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const TEXT_TITLE: &str = "text-4xl font-bold mb-6 text-center text-white drop-shadow-lg";
pub const TEXT_STATUS: &str = "text-2xl font-bold text-center text-white my-4 min-h-[2rem]";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-40 flex items-center justify-center bg-black/60";
pub const MODAL_CARD: &str = "relative z-50 rounded-2xl p-8 max-w-md w-full mx-4 text-center shadow-2xl border-4";
pub const MODAL_WIN: &str = "bg-gradient-to-br from-yellow-300 to-green-400 border-yellow-200 text-gray-900";
pub const MODAL_LOSS: &str = "bg-gradient-to-br from-gray-700 to-gray-900 border-gray-500 text-white";
pub const MODAL_NOTICE: &str = "bg-gradient-to-br from-blue-700 to-indigo-900 border-blue-400 text-white";
pub const MODAL_BUTTON: &str = "mt-6 px-8 py-3 rounded-full font-bold bg-white text-gray-900 hover:bg-gray-100 transition-colors duration-200";
pub const CONFETTI_LAYER: &str = "fixed inset-0 z-50 pointer-events-none";
