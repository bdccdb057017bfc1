//! Application constants

// Endpoints (relative to the configured API base)
pub const HEADER_FRAGMENT_PATH: &str = "/static/components/header.html";
pub const FOOTER_FRAGMENT_PATH: &str = "/static/components/footer.html";
pub const TOP_TOKENS_PATH: &str = "/api/crypto/top-tokens";

// Carousel
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;

// DOM contract
pub const CONNECT_WALLET_ID: &str = "connectWallet";
pub const DISCONNECT_WALLET_ID: &str = "disconnectWallet";
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const WALLET_STATUS_SLOT_ID: &str = "wallet-status";
pub const TOKEN_LIST_SLOT_ID: &str = "token-list";
pub const SLIDE_SELECTOR: &str = ".slide";
pub const DOT_SELECTOR: &str = ".dot";
pub const PREV_SLIDE_SELECTOR: &str = ".prev-slide";
pub const NEXT_SLIDE_SELECTOR: &str = ".next-slide";
pub const HEADER_SELECTOR: &str = "header";
pub const FOOTER_SELECTOR: &str = "footer";
pub const MOBILE_MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const MAIN_NAV_SELECTOR: &str = ".main-nav";
pub const ACTIVE_CLASS: &str = "active";

// Wallet copy
pub const CONNECT_LABEL: &str = "Connect Wallet";
pub const CONNECTED_LABEL: &str = "Connected";
pub const INSTALL_WALLET_MESSAGE: &str =
    "Please install MetaMask or another Web3 wallet to continue.";
