use leptos::prelude::*;

const DEVELOPER_SVG: &str = r##"<svg viewBox="0 0 240 240" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Developer at a laptop">
  <defs>
    <linearGradient id="dev-accent" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0%" stop-color="#a855f7"/>
      <stop offset="100%" stop-color="#ec4899"/>
    </linearGradient>
  </defs>
  <circle cx="120" cy="120" r="110" fill="#0f172a" stroke="url(#dev-accent)" stroke-width="2" opacity="0.9"/>
  <circle cx="120" cy="78" r="26" fill="#f1c27d"/>
  <path d="M94 72 Q120 40 146 72 Q140 56 120 54 Q100 56 94 72Z" fill="#1e293b"/>
  <circle cx="111" cy="80" r="3" fill="#0f172a"/>
  <circle cx="129" cy="80" r="3" fill="#0f172a"/>
  <path d="M112 91 Q120 97 128 91" stroke="#0f172a" stroke-width="2" fill="none" stroke-linecap="round"/>
  <path d="M78 150 Q80 112 120 108 Q160 112 162 150Z" fill="url(#dev-accent)"/>
  <rect x="68" y="146" width="104" height="58" rx="6" fill="#1e293b" stroke="#334155" stroke-width="2"/>
  <rect x="76" y="154" width="88" height="42" rx="3" fill="#020617"/>
  <line x1="82" y1="162" x2="118" y2="162" stroke="#a855f7" stroke-width="3" stroke-linecap="round"/>
  <line x1="88" y1="171" x2="140" y2="171" stroke="#22d3ee" stroke-width="3" stroke-linecap="round"/>
  <line x1="88" y1="180" x2="128" y2="180" stroke="#4ade80" stroke-width="3" stroke-linecap="round"/>
  <line x1="82" y1="189" x2="106" y2="189" stroke="#ec4899" stroke-width="3" stroke-linecap="round"/>
  <rect x="56" y="204" width="128" height="6" rx="3" fill="#334155"/>
</svg>"##;

#[component]
pub fn DeveloperIllustration() -> impl IntoView {
    view! {
        <div
            class="w-64 h-64 md:w-80 md:h-80 mx-auto drop-shadow-[0_0_35px_rgba(168,85,247,0.35)]"
            inner_html=DEVELOPER_SVG
        ></div>
    }
}
